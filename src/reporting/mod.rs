mod reporter;

pub use reporter::Report;
