#[cfg(test)]
mod common;




#[cfg(test)]
mod test_round_limit;
