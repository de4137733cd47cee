//! Cooling jacket definition.

use std::sync::Arc;

use crate::error::{EngineError, EngineResult};
use rf_core::AxialField;
use rf_core::units::{MassRate, Pressure, Temperature};
use rf_fluids::TransportProperties;

/// Channel layout around the chamber wall.
#[derive(Clone)]
pub enum JacketConfiguration {
    /// Straight axial channels.
    Vertical,
    /// A helix around the engine; `pitch` is the axial distance covered per
    /// turn (m). Channels are assumed to tile the full outer surface, so the
    /// channel width equals the pitch.
    Spiral { pitch: AxialField },
}

/// Cooling jacket: channel geometry, inlet state, coolant flow and
/// transport properties.
///
/// Constructed through [`CoolingJacketBuilder`]; all cross-configuration
/// constraints are checked at build time.
#[derive(Clone)]
pub struct CoolingJacket {
    t_coolant_in: f64,
    p0_coolant_in: f64,
    mdot_coolant: f64,
    channel_height: AxialField,
    roughness: Option<AxialField>,
    configuration: JacketConfiguration,
    blockage_ratio: AxialField,
    number_of_fins: u32,
    extent: Option<(f64, f64)>,
    restrain_fins: bool,
    coolant_transport: Arc<dyn TransportProperties>,
}

impl CoolingJacket {
    /// Start building a jacket from the required inputs.
    pub fn builder(
        coolant_transport: Arc<dyn TransportProperties>,
        t_coolant_in: Temperature,
        p0_coolant_in: Pressure,
        mdot_coolant: MassRate,
        channel_height: impl Into<AxialField>,
    ) -> CoolingJacketBuilder {
        CoolingJacketBuilder {
            t_coolant_in: t_coolant_in.value,
            p0_coolant_in: p0_coolant_in.value,
            mdot_coolant: mdot_coolant.value,
            channel_height: channel_height.into(),
            roughness: None,
            spiral_pitch: None,
            blockage_ratio: None,
            number_of_fins: None,
            extent: None,
            restrain_fins: true,
            coolant_transport,
        }
    }

    /// Coolant inlet temperature (K).
    pub fn t_coolant_in(&self) -> f64 {
        self.t_coolant_in
    }

    /// Coolant inlet stagnation pressure (Pa).
    pub fn p0_coolant_in(&self) -> f64 {
        self.p0_coolant_in
    }

    /// Coolant mass flow rate (kg/s).
    pub fn mdot_coolant(&self) -> f64 {
        self.mdot_coolant
    }

    /// Radial channel height at x (m).
    pub fn channel_height(&self, x: f64) -> f64 {
        self.channel_height.at(x)
    }

    /// Channel wall roughness at x (m); `None` means smooth-wall friction.
    pub fn roughness(&self, x: f64) -> Option<f64> {
        self.roughness.as_ref().map(|r| r.at(x))
    }

    pub fn configuration(&self) -> &JacketConfiguration {
        &self.configuration
    }

    /// Spiral pitch at x (m); `None` for vertical channels.
    pub fn pitch(&self, x: f64) -> Option<f64> {
        match &self.configuration {
            JacketConfiguration::Spiral { pitch } => Some(pitch.at(x)),
            JacketConfiguration::Vertical => None,
        }
    }

    /// Fraction of the channel cross-section blocked by fins at x.
    pub fn blockage_ratio(&self, x: f64) -> f64 {
        self.blockage_ratio.at(x)
    }

    /// Number of fins (vertical: around the circumference; spiral: per
    /// pitch, numerically the number of parallel channels).
    pub fn number_of_fins(&self) -> u32 {
        self.number_of_fins
    }

    /// Axial extent of the jacket, if restricted.
    pub fn extent(&self) -> Option<(f64, f64)> {
        self.extent
    }

    /// Whether fins are attached to the outer jacket and restrain the inner
    /// wall against pressure.
    pub fn restrain_fins(&self) -> bool {
        self.restrain_fins
    }

    pub fn coolant_transport(&self) -> &dyn TransportProperties {
        self.coolant_transport.as_ref()
    }
}

/// Builder for [`CoolingJacket`].
pub struct CoolingJacketBuilder {
    t_coolant_in: f64,
    p0_coolant_in: f64,
    mdot_coolant: f64,
    channel_height: AxialField,
    roughness: Option<AxialField>,
    spiral_pitch: Option<AxialField>,
    blockage_ratio: Option<AxialField>,
    number_of_fins: Option<u32>,
    extent: Option<(f64, f64)>,
    restrain_fins: bool,
    coolant_transport: Arc<dyn TransportProperties>,
}

impl CoolingJacketBuilder {
    /// Use spiral channels with the given pitch (m).
    pub fn spiral(mut self, pitch: impl Into<AxialField>) -> Self {
        self.spiral_pitch = Some(pitch.into());
        self
    }

    /// Channel wall roughness (m) for pressure-drop calculations.
    pub fn roughness(mut self, roughness: impl Into<AxialField>) -> Self {
        self.roughness = Some(roughness.into());
        self
    }

    /// Fraction of the channel cross-section occupied by fins, in [0, 1).
    pub fn blockage_ratio(mut self, blockage_ratio: impl Into<AxialField>) -> Self {
        self.blockage_ratio = Some(blockage_ratio.into());
        self
    }

    pub fn number_of_fins(mut self, number_of_fins: u32) -> Self {
        self.number_of_fins = Some(number_of_fins);
        self
    }

    /// Restrict the jacket to an axial range; either order is accepted.
    pub fn extent(mut self, x_a: f64, x_b: f64) -> Self {
        self.extent = Some((x_a.min(x_b), x_a.max(x_b)));
        self
    }

    pub fn restrain_fins(mut self, restrain_fins: bool) -> Self {
        self.restrain_fins = restrain_fins;
        self
    }

    pub fn build(self) -> EngineResult<CoolingJacket> {
        for (v, name) in [
            (self.t_coolant_in, "coolant inlet temperature"),
            (self.p0_coolant_in, "coolant inlet stagnation pressure"),
            (self.mdot_coolant, "coolant mass flow rate"),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(EngineError::Config {
                    what: format!("{name} must be positive and finite"),
                });
            }
        }

        if let AxialField::Constant(br) = self.blockage_ratio.clone().unwrap_or(0.0.into())
            && !(0.0..1.0).contains(&br)
        {
            return Err(EngineError::Config {
                what: format!("blockage ratio must be in [0, 1), got {br}"),
            });
        }

        let has_blockage = self.blockage_ratio.is_some();
        let (configuration, number_of_fins) = match self.spiral_pitch {
            Some(pitch) => {
                // Spiral channels always have at least one dividing fin per
                // pitch: it is the channel count in parallel.
                let fins = self.number_of_fins.unwrap_or(1);
                if fins < 1 {
                    return Err(EngineError::Config {
                        what: "spiral channels need number_of_fins >= 1".into(),
                    });
                }
                (JacketConfiguration::Spiral { pitch }, fins)
            }
            None => {
                let fins = self.number_of_fins.unwrap_or(0);
                if has_blockage && fins == 0 {
                    return Err(EngineError::Config {
                        what: "vertical channels with a blockage ratio need number_of_fins >= 1"
                            .into(),
                    });
                }
                (JacketConfiguration::Vertical, fins)
            }
        };

        Ok(CoolingJacket {
            t_coolant_in: self.t_coolant_in,
            p0_coolant_in: self.p0_coolant_in,
            mdot_coolant: self.mdot_coolant,
            channel_height: self.channel_height,
            roughness: self.roughness,
            configuration,
            blockage_ratio: self.blockage_ratio.unwrap_or(0.0.into()),
            number_of_fins,
            extent: self.extent,
            restrain_fins: self.restrain_fins,
            coolant_transport: self.coolant_transport,
        })
    }
}
