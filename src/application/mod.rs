pub mod return_status;
