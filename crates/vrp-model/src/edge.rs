//! Directed arcs with inverse linkage and a per-arc travel-time noise model.

use rand_distr::{Distribution, LogNormal};
use vrp_core::{EdgeId, NodeId, SimRng, VrpError, VrpResult};

/// A directed arc of the instance graph.
///
/// Arcs come in inverse pairs: `edge(e.inverse).inverse == e`, with equal
/// travel time, variance, and saving on both directions.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub origin: NodeId,
    pub end: NodeId,

    /// Deterministic travel time along the arc.
    pub travel_time: f64,

    /// Travel-time variance, `(pvariance · distance)²`.
    pub variance: f64,

    /// Clarke–Wright saving, `c(i,0) + c(0,j) − c(i,j)`.  Zero on depot arcs.
    pub saving: f64,

    /// The arc in the opposite direction.
    pub inverse: EdgeId,

    /// Precomputed travel-time noise.  `None` when the deterministic travel
    /// time is zero: such arcs are noiseless.
    noise: Option<LogNormal<f64>>,
}

impl Edge {
    /// Build an arc, deriving the log-normal noise parameters from the
    /// deterministic travel time `m` and the variance `v`:
    ///
    ///   φ = √(v + m²),  μ = ln(m²/φ),  σ = √(ln(φ²/m²))
    ///
    /// This is not the textbook parametrization from mean and standard
    /// deviation: it anchors the distribution on the deterministic travel
    /// time itself, so shrinking `v` collapses the samples onto `m`.
    pub(crate) fn new(origin: NodeId, end: NodeId, travel_time: f64, variance: f64) -> VrpResult<Self> {
        let noise = if travel_time > 0.0 {
            let m = travel_time;
            let phi = (variance + m * m).sqrt();
            let mu = (m * m / phi).ln();
            // ln can dip fractionally below zero at variance ≈ 0
            let sigma = ((phi * phi) / (m * m)).ln().max(0.0).sqrt();
            let dist = LogNormal::new(mu, sigma)
                .map_err(|e| VrpError::Instance(format!("arc ({origin}, {end}) noise: {e}")))?;
            Some(dist)
        } else {
            None
        };
        Ok(Self {
            origin,
            end,
            travel_time,
            variance,
            saving: 0.0,
            inverse: EdgeId::INVALID,
            noise,
        })
    }

    /// Draw one stochastic travel time.  Deterministically zero when the
    /// arc's travel time is zero.
    #[inline]
    pub fn stochastic_travel_time(&self, rng: &mut SimRng) -> f64 {
        match self.noise {
            Some(dist) => dist.sample(rng.inner()),
            None => 0.0,
        }
    }
}
