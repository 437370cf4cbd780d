mod record_factory;
#[cfg(test)]
mod tests;

pub use record_factory::RecordFactory;
