pub mod true_type;
