pub mod form;
pub mod leads;
pub mod notify;
