quantity!(Percentage, f64, suffix: "%", precision: 0);

impl Percentage {
    pub const FULL: Self = Self(100.0);

    /// Clamp into `0..=100` and round to the nearest whole percent.
    pub fn normalize(self) -> Self {
        Self(self.0.clamp(0.0, 100.0).round())
    }
}
