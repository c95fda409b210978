pub mod backspace_compare;
