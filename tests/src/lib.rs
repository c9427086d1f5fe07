#[cfg(test)]
mod order;
#[cfg(test)]
mod utils;
