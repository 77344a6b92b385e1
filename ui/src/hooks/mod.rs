pub mod use_host_ready;
