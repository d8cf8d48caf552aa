// Domain layer modules
pub mod minimal_transaction;
pub mod transaction;
pub mod transaction_record;

// Re-exports
pub use minimal_transaction::MinimalTransaction;
pub use transaction::{Transaction, TransactionType};
pub use transaction_record::TransactionRecord;
