pub mod alert;
pub mod contact;
pub mod medicine;
pub mod vitals;
