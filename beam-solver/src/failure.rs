//! Static failure theories for a stress state at a point
//!
//! Principal stresses come from the symmetric 3x3 stress tensor and are
//! compared against material strengths using:
//! - Maximum Shear Stress (Tresca)
//! - Distortion Energy (von Mises)
//! - Ductile Coulomb-Mohr
//!
//! Strengths and stresses must share one unit system.

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};
use crate::math::{symmetric_eigenvalues_desc, Mat3};

/// Cauchy stress tensor components (tension positive)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StressTensor {
    pub sx: f64,
    pub sy: f64,
    pub sz: f64,
    pub txy: f64,
    pub txz: f64,
    pub tyz: f64,
}

impl StressTensor {
    /// Create a stress tensor from its six independent components
    pub fn new(sx: f64, sy: f64, sz: f64, txy: f64, txz: f64, tyz: f64) -> Self {
        Self { sx, sy, sz, txy, txz, tyz }
    }

    /// Uniaxial normal stress along x
    pub fn uniaxial(sx: f64) -> Self {
        Self {
            sx,
            ..Self::default()
        }
    }

    /// Plane stress in the xy plane
    pub fn plane(sx: f64, sy: f64, txy: f64) -> Self {
        Self {
            sx,
            sy,
            txy,
            ..Self::default()
        }
    }

    /// Symmetric matrix form
    pub fn to_matrix(&self) -> Mat3 {
        Mat3::new(
            self.sx, self.txy, self.txz,
            self.txy, self.sy, self.tyz,
            self.txz, self.tyz, self.sz,
        )
    }

    /// Principal stresses, sorted σ1 ≥ σ2 ≥ σ3
    pub fn principal_stresses(&self) -> PrincipalStresses {
        let values = symmetric_eigenvalues_desc(&self.to_matrix());
        PrincipalStresses {
            s1: values[0],
            s2: values[1],
            s3: values[2],
        }
    }
}

/// Principal stresses in descending order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipalStresses {
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
}

impl PrincipalStresses {
    /// Maximum in-plane shear stress (σ1 − σ3) / 2
    pub fn max_shear(&self) -> f64 {
        (self.s1 - self.s3) / 2.0
    }

    /// Von Mises equivalent stress
    pub fn von_mises(&self) -> f64 {
        (((self.s1 - self.s2).powi(2) + (self.s2 - self.s3).powi(2) + (self.s3 - self.s1).powi(2))
            / 2.0)
            .sqrt()
    }
}

/// Failure theory identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion {
    MaximumShearStress,
    DistortionEnergy,
    DuctileCoulombMohr,
}

/// Outcome of one failure theory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub criterion: Criterion,
    /// Quantity compared against the limit: a stress for MSS and DE,
    /// a dimensionless ratio for DCM
    pub equivalent: f64,
    /// Factor of safety, `None` when failure is predicted
    pub factor_of_safety: Option<f64>,
    /// True when the theory predicts failure
    pub fails: bool,
}

impl CriterionResult {
    fn from_ratio(criterion: Criterion, equivalent: f64, limit: f64) -> Self {
        let fails = equivalent >= limit;
        let factor_of_safety = if fails {
            None
        } else if equivalent <= 0.0 {
            Some(f64::INFINITY)
        } else {
            Some(limit / equivalent)
        };
        Self {
            criterion,
            equivalent,
            factor_of_safety,
            fails,
        }
    }
}

/// Material strengths for the failure checks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Strengths {
    /// Yield strength, used by MSS and DE
    pub yield_strength: f64,
    /// Tensile yield strength, used by DCM
    pub tensile: f64,
    /// Compressive yield strength (positive magnitude), used by DCM
    pub compressive: f64,
}

impl Strengths {
    pub fn new(yield_strength: f64, tensile: f64, compressive: f64) -> Self {
        Self {
            yield_strength,
            tensile,
            compressive,
        }
    }

    /// Ductile material with equal strengths in tension and compression
    pub fn ductile(yield_strength: f64) -> Self {
        Self::new(yield_strength, yield_strength, yield_strength)
    }
}

/// Maximum Shear Stress theory: failure when σ1 − σ3 ≥ Sy
pub fn maximum_shear_stress(p: &PrincipalStresses, yield_strength: f64) -> BeamResult<CriterionResult> {
    check_strength("yield_strength", yield_strength)?;
    Ok(CriterionResult::from_ratio(
        Criterion::MaximumShearStress,
        2.0 * p.max_shear(),
        yield_strength,
    ))
}

/// Distortion Energy theory: failure when σ' ≥ Sy
pub fn distortion_energy(p: &PrincipalStresses, yield_strength: f64) -> BeamResult<CriterionResult> {
    check_strength("yield_strength", yield_strength)?;
    Ok(CriterionResult::from_ratio(
        Criterion::DistortionEnergy,
        p.von_mises(),
        yield_strength,
    ))
}

/// Ductile Coulomb-Mohr theory: failure when σ1/St − σ3/Sc ≥ 1.
///
/// The extreme principal stresses enter with their signs, so a triaxial
/// tension state is credited with its σ3.
pub fn ductile_coulomb_mohr(
    p: &PrincipalStresses,
    tensile: f64,
    compressive: f64,
) -> BeamResult<CriterionResult> {
    check_strength("tensile", tensile)?;
    check_strength("compressive", compressive)?;

    Ok(CriterionResult::from_ratio(
        Criterion::DuctileCoulombMohr,
        p.s1 / tensile - p.s3 / compressive,
        1.0,
    ))
}

/// Results of all three failure theories at one point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FailureAssessment {
    pub principal: PrincipalStresses,
    pub maximum_shear_stress: CriterionResult,
    pub distortion_energy: CriterionResult,
    pub ductile_coulomb_mohr: CriterionResult,
}

impl FailureAssessment {
    /// All three results
    pub fn criteria(&self) -> [CriterionResult; 3] {
        [
            self.maximum_shear_stress,
            self.distortion_energy,
            self.ductile_coulomb_mohr,
        ]
    }

    /// True when any theory predicts failure
    pub fn any_fails(&self) -> bool {
        self.criteria().iter().any(|c| c.fails)
    }

    /// The most pessimistic result: a failing theory, else the lowest factor of safety
    pub fn governing(&self) -> CriterionResult {
        self.criteria()
            .into_iter()
            .min_by(|a, b| {
                let na = a.factor_of_safety.unwrap_or(0.0);
                let nb = b.factor_of_safety.unwrap_or(0.0);
                na.total_cmp(&nb)
            })
            .unwrap_or(self.maximum_shear_stress)
    }
}

/// Run all three failure theories on a stress state
pub fn assess(stress: &StressTensor, strengths: &Strengths) -> BeamResult<FailureAssessment> {
    let principal = stress.principal_stresses();
    Ok(FailureAssessment {
        principal,
        maximum_shear_stress: maximum_shear_stress(&principal, strengths.yield_strength)?,
        distortion_energy: distortion_energy(&principal, strengths.yield_strength)?,
        ductile_coulomb_mohr: ductile_coulomb_mohr(
            &principal,
            strengths.tensile,
            strengths.compressive,
        )?,
    })
}

fn check_strength(name: &str, value: f64) -> BeamResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(BeamError::InvalidInput(format!(
            "{name} must be positive and finite, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniaxial_principal_stresses() {
        let p = StressTensor::uniaxial(83.9).principal_stresses();
        assert_relative_eq!(p.s1, 83.9, epsilon = 1e-10);
        assert_relative_eq!(p.s2, 0.0, epsilon = 1e-10);
        assert_relative_eq!(p.s3, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_uniaxial_assessment() {
        // Sy = 490, St = Sc = 45
        let a = assess(&StressTensor::uniaxial(83.9), &Strengths::new(490.0, 45.0, 45.0)).unwrap();

        assert!(!a.maximum_shear_stress.fails);
        assert_relative_eq!(a.maximum_shear_stress.factor_of_safety.unwrap(), 490.0 / 83.9, epsilon = 1e-9);
        assert_relative_eq!(a.distortion_energy.equivalent, 83.9, epsilon = 1e-9);
        assert_relative_eq!(a.distortion_energy.factor_of_safety.unwrap(), 490.0 / 83.9, epsilon = 1e-9);

        assert!(a.ductile_coulomb_mohr.fails);
        assert_relative_eq!(a.ductile_coulomb_mohr.equivalent, 83.9 / 45.0, epsilon = 1e-9);
        assert!(a.ductile_coulomb_mohr.factor_of_safety.is_none());
        assert!(a.any_fails());
        assert_eq!(a.governing().criterion, Criterion::DuctileCoulombMohr);
    }

    #[test]
    fn test_pure_shear() {
        // Pure shear τ: σ1 = τ, σ3 = −τ, von Mises √3·τ
        let p = StressTensor::plane(0.0, 0.0, 10.0).principal_stresses();
        assert_relative_eq!(p.s1, 10.0, epsilon = 1e-10);
        assert_relative_eq!(p.s3, -10.0, epsilon = 1e-10);
        assert_relative_eq!(p.von_mises(), 3.0_f64.sqrt() * 10.0, epsilon = 1e-9);

        let mss = maximum_shear_stress(&p, 100.0).unwrap();
        assert_relative_eq!(mss.factor_of_safety.unwrap(), 5.0, epsilon = 1e-9);

        let dcm = ductile_coulomb_mohr(&p, 50.0, 100.0).unwrap();
        assert_relative_eq!(dcm.equivalent, 10.0 / 50.0 + 10.0 / 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_triaxial_tension() {
        let stress = StressTensor::new(100.0, 50.0, 30.0, 0.0, 0.0, 0.0);
        let p = stress.principal_stresses();
        assert_relative_eq!(p.max_shear(), 35.0, epsilon = 1e-9);

        // σ3 in tension offsets σ1
        let dcm = ductile_coulomb_mohr(&p, 45.0, 45.0).unwrap();
        assert_relative_eq!(dcm.equivalent, 100.0 / 45.0 - 30.0 / 45.0, epsilon = 1e-9);
        assert!(dcm.fails);

        let low = StressTensor::new(40.0, 30.0, 20.0, 0.0, 0.0, 0.0).principal_stresses();
        let dcm = ductile_coulomb_mohr(&low, 45.0, 45.0).unwrap();
        assert_relative_eq!(dcm.factor_of_safety.unwrap(), 45.0 / 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_compressive_quadrant() {
        // Both principal stresses compressive: only σ3 contributes
        let p = StressTensor::plane(-20.0, -40.0, 0.0).principal_stresses();
        let dcm = ductile_coulomb_mohr(&p, 30.0, 80.0).unwrap();
        assert_relative_eq!(dcm.equivalent, 0.5, epsilon = 1e-9);
        assert_relative_eq!(dcm.factor_of_safety.unwrap(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unstressed_point() {
        let a = assess(&StressTensor::default(), &Strengths::ductile(250.0)).unwrap();
        assert!(!a.any_fails());
        assert_eq!(a.distortion_energy.factor_of_safety, Some(f64::INFINITY));
    }

    #[test]
    fn test_invalid_strength() {
        let p = StressTensor::uniaxial(10.0).principal_stresses();
        assert!(matches!(maximum_shear_stress(&p, 0.0), Err(BeamError::InvalidInput(_))));
        assert!(matches!(ductile_coulomb_mohr(&p, 10.0, -1.0), Err(BeamError::InvalidInput(_))));
    }
}
