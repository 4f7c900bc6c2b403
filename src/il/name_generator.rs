use super::Name;

/// Hands out temporary names `t1, t2, …` in allocation order. Each generation run owns its own
/// generator, so numbering always restarts at `t1`.
pub struct NameGenerator {
    index: usize,
}

impl NameGenerator {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    /// Generates a new unique temporary name.
    pub fn next_temp(&mut self) -> Name {
        self.index += 1;
        Name::Temp(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_temp_generates_ascending_temp_values() {
        let mut name_gen = NameGenerator::new();

        assert_eq!("t1", name_gen.next_temp().to_string());
        assert_eq!("t2", name_gen.next_temp().to_string());
    }

    #[test]
    fn new_generators_start_over() {
        let mut first = NameGenerator::new();
        first.next_temp();
        first.next_temp();

        assert_eq!(Name::Temp(1), NameGenerator::new().next_temp());
    }
}
