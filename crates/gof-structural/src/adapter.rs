//! Adapter: make a Fahrenheit-only probe usable where Celsius is expected.
//!
//! [`TemperatureSource`] is the target interface the rest of the system is
//! written against. [`FahrenheitProbe`] is the adaptee — useful hardware
//! with the wrong units and no trait impl. [`ProbeAdapter`] owns a probe
//! and does the unit conversion at the boundary, so client code like
//! [`dashboard_line`] never learns Fahrenheit existed.

/// The target interface: everything upstream reads Celsius.
pub trait TemperatureSource {
    /// Current reading in degrees Celsius.
    fn celsius(&self) -> f64;
}

/// A native sensor that already speaks the target interface.
#[derive(Debug, Clone, Copy)]
pub struct CelsiusSensor {
    reading: f64,
}

impl CelsiusSensor {
    /// A sensor pinned at the given Celsius reading.
    pub fn new(reading: f64) -> Self {
        Self { reading }
    }
}

impl TemperatureSource for CelsiusSensor {
    fn celsius(&self) -> f64 {
        self.reading
    }
}

/// The adaptee: third-party hardware that reports Fahrenheit and knows
/// nothing about [`TemperatureSource`].
#[derive(Debug, Clone, Copy)]
pub struct FahrenheitProbe {
    reading: f64,
}

impl FahrenheitProbe {
    /// A probe pinned at the given Fahrenheit reading.
    pub fn new(reading: f64) -> Self {
        Self { reading }
    }

    /// Current reading in degrees Fahrenheit — the only interface the
    /// probe offers.
    pub fn fahrenheit(&self) -> f64 {
        self.reading
    }
}

/// Presents a [`FahrenheitProbe`] as a [`TemperatureSource`].
///
/// # Example
/// ```
/// use gof_structural::adapter::{FahrenheitProbe, ProbeAdapter, TemperatureSource};
///
/// let adapter = ProbeAdapter::new(FahrenheitProbe::new(212.0));
/// assert_eq!(adapter.celsius(), 100.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProbeAdapter {
    probe: FahrenheitProbe,
}

impl ProbeAdapter {
    /// Wrap a probe.
    pub fn new(probe: FahrenheitProbe) -> Self {
        Self { probe }
    }

    /// Take the probe back out.
    pub fn into_inner(self) -> FahrenheitProbe {
        self.probe
    }
}

impl TemperatureSource for ProbeAdapter {
    fn celsius(&self) -> f64 {
        (self.probe.fahrenheit() - 32.0) * 5.0 / 9.0
    }
}

/// Client code: renders any temperature source, native or adapted.
pub fn dashboard_line(source: &dyn TemperatureSource) -> String {
    format!("current temperature: {:.1} °C", source.celsius())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fixed_points_convert_exactly() {
        assert_eq!(ProbeAdapter::new(FahrenheitProbe::new(32.0)).celsius(), 0.0);
        assert_eq!(
            ProbeAdapter::new(FahrenheitProbe::new(212.0)).celsius(),
            100.0
        );
        // The scales cross at -40.
        assert_eq!(
            ProbeAdapter::new(FahrenheitProbe::new(-40.0)).celsius(),
            -40.0
        );
    }

    #[test]
    fn body_temperature_converts_within_tolerance() {
        let adapter = ProbeAdapter::new(FahrenheitProbe::new(98.6));
        assert_relative_eq!(adapter.celsius(), 37.0, epsilon = 1e-12);
    }

    #[test]
    fn client_accepts_native_and_adapted_sources() {
        let native = CelsiusSensor::new(21.5);
        let adapted = ProbeAdapter::new(FahrenheitProbe::new(70.7));

        assert_eq!(dashboard_line(&native), "current temperature: 21.5 °C");
        assert_eq!(dashboard_line(&adapted), "current temperature: 21.5 °C");
    }

    #[test]
    fn adapter_returns_the_probe_unchanged() {
        let probe = FahrenheitProbe::new(451.0);
        let round_tripped = ProbeAdapter::new(probe).into_inner();
        assert_eq!(round_tripped.fahrenheit(), 451.0);
    }
}
