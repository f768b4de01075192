pub mod file;
pub mod option_time_ser;

#[cfg(test)]
pub mod test_util;
