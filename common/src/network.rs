pub mod cidr;
pub mod exclude;
