// SPDX-License-Identifier: MIT

//! Fitness calculator API.

use crate::error::{AppError, Result};
use crate::AppState;
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/calc", post(calc))
}

/// Calculator input. `sex` and `activity` are optional; anything other than
/// `"male"` uses the female formula, matching the reference behavior.
#[derive(Deserialize)]
pub struct CalcRequest {
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Age in years
    pub age: f64,
    #[serde(default = "default_sex")]
    pub sex: String,
    /// Activity multiplier (1.2 sedentary .. 1.9 athlete)
    #[serde(default = "default_activity")]
    pub activity: f64,
}

fn default_sex() -> String {
    "male".to_string()
}

fn default_activity() -> f64 {
    1.55
}

#[derive(Debug, PartialEq, Serialize)]
pub struct CalcResponse {
    pub bmr: i64,
    pub tdee: i64,
}

/// Mifflin-St Jeor BMR and TDEE.
pub fn bmr_tdee(req: &CalcRequest) -> Result<CalcResponse> {
    for (name, value) in [
        ("height", req.height),
        ("weight", req.weight),
        ("age", req.age),
        ("activity", req.activity),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::BadRequest(format!("{name} must be positive")));
        }
    }

    let bmr = if req.sex == "male" {
        10.0 * req.weight + 6.25 * req.height - 5.0 * req.age + 5.0
    } else {
        10.0 * req.weight + 6.25 * req.height - 5.0 * req.age - 161.0
    };

    Ok(CalcResponse {
        bmr: bmr.round() as i64,
        tdee: (bmr * req.activity).round() as i64,
    })
}

/// Compute BMR/TDEE from the posted measurements.
async fn calc(Json(req): Json<CalcRequest>) -> Result<Json<CalcResponse>> {
    Ok(Json(bmr_tdee(&req)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(height: f64, weight: f64, age: f64, sex: &str, activity: f64) -> CalcRequest {
        CalcRequest {
            height,
            weight,
            age,
            sex: sex.to_string(),
            activity,
        }
    }

    #[test]
    fn test_male_formula() {
        // 10*80 + 6.25*180 - 5*30 + 5 = 1780
        let resp = bmr_tdee(&request(180.0, 80.0, 30.0, "male", 1.55)).unwrap();
        assert_eq!(resp.bmr, 1780);
        assert_eq!(resp.tdee, 2759);
    }

    #[test]
    fn test_female_formula() {
        // 10*60 + 6.25*165 - 5*25 - 161 = 1345.25
        let resp = bmr_tdee(&request(165.0, 60.0, 25.0, "female", 1.2)).unwrap();
        assert_eq!(resp.bmr, 1345);
        assert_eq!(resp.tdee, 1614);
    }

    #[test]
    fn test_unknown_sex_uses_female_formula() {
        let female = bmr_tdee(&request(165.0, 60.0, 25.0, "female", 1.2)).unwrap();
        let other = bmr_tdee(&request(165.0, 60.0, 25.0, "other", 1.2)).unwrap();
        assert_eq!(female, other);
    }

    #[test]
    fn test_non_positive_inputs_rejected() {
        let err = bmr_tdee(&request(0.0, 80.0, 30.0, "male", 1.55)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = bmr_tdee(&request(180.0, 80.0, f64::NAN, "male", 1.55)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
