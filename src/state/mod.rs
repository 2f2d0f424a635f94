/// View states and transitions.
pub mod machine;
