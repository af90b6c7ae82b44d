//! Transaction encoding: tabular rows → item transactions.

pub mod encoder;

pub use encoder::{parse_flag, EncodedTransactions, TransactionEncoder};
