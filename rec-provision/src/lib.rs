pub mod cli;
pub mod provisioner;
