pub mod xml;

#[cfg(test)]
mod tests;
