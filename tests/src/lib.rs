#[cfg(test)]
mod expansion;
