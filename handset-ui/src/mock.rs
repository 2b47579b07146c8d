//! Recording collaborators for tests

use heapless::{String, Vec};

use crate::traits::{ClockSource, Color, CurTime, FontSize, Point, PowerSensor, Rasterizer, TextAlign};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear,
    Print {
        point: Point,
        text: String<24>,
        size: FontSize,
        align: TextAlign,
        color: Color,
    },
}

impl Call {
    pub fn print(point: Point, text: &str, size: FontSize, align: TextAlign, color: Color) -> Self {
        let mut s = String::new();
        s.push_str(text).unwrap();
        Call::Print {
            point,
            text: s,
            size,
            align,
            color,
        }
    }
}

/// Rasterizer that records every call
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call, 64>,
}

impl Recorder {
    pub fn clears(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Clear)).count()
    }

    pub fn prints(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Print { .. }))
            .count()
    }
}

impl Rasterizer for Recorder {
    fn clear_screen(&mut self) {
        self.calls.push(Call::Clear).unwrap();
    }

    fn print(&mut self, point: Point, text: &str, size: FontSize, align: TextAlign, color: Color) {
        self.calls
            .push(Call::print(point, text, size, align, color))
            .unwrap();
    }
}

pub struct FixedClock(pub CurTime);

impl ClockSource for FixedClock {
    fn time(&mut self) -> CurTime {
        self.0
    }
}

pub struct FixedBattery(pub f32);

impl PowerSensor for FixedBattery {
    fn battery_voltage(&mut self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn test_recorder_overflow_panics() {
        let mut r = Recorder::default();
        for _ in 0..=r.calls.capacity() {
            r.clear_screen();
        }
    }
}
