/// A bounded value moved in fixed steps, standing in for a range input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Slider {
    /// Build a slider; the initial value is clamped and snapped to a step.
    pub fn new(value: f32, min: f32, max: f32, step: f32) -> Self {
        let mut slider = Self { value: min, min, max, step };
        slider.set(value);
        slider
    }

    pub fn set(&mut self, value: f32) {
        let steps = ((value - self.min) / self.step).round();
        self.value = (self.min + steps * self.step).clamp(self.min, self.max);
    }

    pub fn increase(&mut self) {
        self.set(self.value + self.step);
    }

    pub fn decrease(&mut self) {
        self.set(self.value - self.step);
    }

    /// Position in `[0.0, 1.0]`.
    pub fn ratio(&self) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((self.value - self.min) / (self.max - self.min)) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_at_bounds() {
        let mut hours = Slider::new(7.5, 0.5, 8.0, 0.5);
        hours.increase();
        hours.increase();
        assert_eq!(hours.value, 8.0);
        let mut cards = Slider::new(10.0, 5.0, 100.0, 5.0);
        cards.decrease();
        cards.decrease();
        assert_eq!(cards.value, 5.0);
    }

    #[test]
    fn test_snaps_to_step() {
        let slider = Slider::new(2.3, 0.5, 8.0, 0.5);
        assert_eq!(slider.value, 2.5);
        let slider = Slider::new(250.0, 5.0, 100.0, 5.0);
        assert_eq!(slider.value, 100.0);
    }

    #[test]
    fn test_ratio() {
        let slider = Slider::new(50.0, 0.0, 100.0, 5.0);
        assert!((slider.ratio() - 0.5).abs() < 1e-6);
    }
}
