//! Password checking library
//!
//! This library combines local password strength heuristics with a
//! k-anonymity leak lookup against a prefix-indexed breach database.
//! Passwords never leave the client: only the first five characters of the
//! SHA-1 digest are sent to the lookup service, and the returned record
//! range is scanned locally for the digest suffix.
//!
//! # Features
//!
//! - `async` (default): Enables the leak lookup client and the debounced
//!   check orchestrator
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_CHECK_API_BASE`: Custom base URI of the range lookup service
//!   (default: `https://api.pwnedpasswords.com/range/`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_check::{CheckConfig, CheckOrchestrator, Indication, Presenter, PwnedClient};
//! use secrecy::SecretString;
//!
//! struct PagePresenter;
//!
//! impl Presenter for PagePresenter {
//!     fn clear(&mut self) {}
//!
//!     fn present(&mut self, indication: Indication, messages: &[String]) {
//!         println!("{:?}: {:?}", indication, messages);
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = CheckConfig::from_env();
//!     let client = PwnedClient::new(&config);
//!     let orchestrator = CheckOrchestrator::new(config, client, PagePresenter);
//!
//!     // Feed "password value changed" events as the user types.
//!     let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!     orchestrator.handle_input(password);
//!
//!     tokio::time::sleep(std::time::Duration::from_secs(1)).await;
//! }
//! ```

// Internal modules
mod config;
mod digest;
mod evaluator;
mod records;
mod sections;
mod types;

#[cfg(feature = "async")]
mod lookup;
#[cfg(feature = "async")]
mod orchestrator;

// Public API
pub use config::{
    CheckConfig, DEFAULT_API_BASE, DEFAULT_CHECK_DELAY, DEFAULT_CRITICAL_LEAK_THRESHOLD,
};
pub use digest::{DIGEST_LENGTH, PREFIX_LENGTH, PasswordDigest};
pub use evaluator::evaluate_heuristics;
pub use records::count_leak_occasions;
pub use sections::{
    MIN_DIFFERENT_SYMBOLS, MIN_LENGTH, has_only_digits, has_only_lowercase_letters,
    has_only_uppercase_letters,
};
pub use types::{Findings, Indication, LeakStatus, Presenter};

#[cfg(feature = "async")]
pub use lookup::{LookupError, PwnedClient, RangeProvider};
#[cfg(feature = "async")]
pub use orchestrator::{CheckOrchestrator, CheckState};
