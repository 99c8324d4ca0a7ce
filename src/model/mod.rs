pub mod compartments;
