quantity!(Watts, f64, suffix: " W", precision: 0);

impl Watts {
    /// Round to whole watts, the resolution every chart and table works in.
    pub fn round(self) -> Self {
        Self(self.0.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_ok() {
        assert_eq!(Watts(4975.7).to_string(), "4976 W");
        assert_eq!(Watts(-2700.0).to_string(), "-2700 W");
    }

    #[test]
    fn from_str_ok() {
        assert_eq!("3500".parse::<Watts>().unwrap(), Watts(3500.0));
    }

    #[test]
    fn ordering_ok() {
        assert!(Watts(1.0) > Watts::ZERO);
        assert_eq!(Watts(1.0).max(Watts(-1.0)), Watts(1.0));
    }
}
