pub mod debounce;
pub mod timer;
