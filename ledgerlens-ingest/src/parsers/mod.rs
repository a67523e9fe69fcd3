pub mod csv_transactions;
pub mod extraction_json;
