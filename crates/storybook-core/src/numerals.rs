use serde::{Deserialize, Serialize};

const ODIA_DIGITS: [char; 10] = ['୦', '୧', '୨', '୩', '୪', '୫', '୬', '୭', '୮', '୯'];

/// Digit set used for page numbers.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    #[default]
    Western,
    Odia,
}

impl NumeralSystem {
    pub fn format(self, value: usize) -> String {
        let western = value.to_string();
        match self {
            NumeralSystem::Western => western,
            NumeralSystem::Odia => western
                .chars()
                .map(|ch| {
                    ch.to_digit(10)
                        .map(|digit| ODIA_DIGITS[digit as usize])
                        .unwrap_or(ch)
                })
                .collect(),
        }
    }
}

impl std::fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            NumeralSystem::Western => "western",
            NumeralSystem::Odia => "odia",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::NumeralSystem;

    #[test]
    fn formats_odia_digits() {
        assert_eq!(NumeralSystem::Odia.format(0), "୦");
        assert_eq!(NumeralSystem::Odia.format(109), "୧୦୯");
    }

    #[test]
    fn western_is_plain() {
        assert_eq!(NumeralSystem::Western.format(42), "42");
    }
}
