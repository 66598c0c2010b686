use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A company as stored in the registry
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: ID,
    pub profile: CompanyProfile,
}

impl Entity for Company {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidCompanyError {
    #[error("The company name must not be empty")]
    MissingName,
    #[error("No company fields were provided")]
    EmptyPatch,
}

/// Every field a company record can hold.
///
/// Monetary amounts are in units of 10 000 JPY except `starting_salary`
/// which is in JPY. Percentages are stored as plain numbers, e.g. `8.5`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub company_name: String,
    #[serde(default, deserialize_with = "company_registry_utils::optional_text")]
    pub corporate_philosophy: Option<String>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_text")]
    pub ceo_name: Option<String>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_text")]
    pub headquarters: Option<String>,
    #[serde(default, deserialize_with = "company_registry_utils::optional")]
    pub founded_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "company_registry_utils::optional")]
    pub employees: Option<i32>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_text")]
    pub major_clients: Option<String>,
    #[serde(default, deserialize_with = "company_registry_utils::optional")]
    pub capital: Option<i64>,
    #[serde(default, deserialize_with = "company_registry_utils::optional")]
    pub sales: Option<i64>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_float")]
    pub roe: Option<f64>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_float")]
    pub operating_profit_margin: Option<f64>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_text")]
    pub main_business: Option<String>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_text")]
    pub strengths: Option<String>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_text")]
    pub weaknesses: Option<String>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_text")]
    pub target_customers: Option<String>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_text")]
    pub ideal_candidate: Option<String>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_text")]
    pub recruiting_positions: Option<String>,
    #[serde(default, deserialize_with = "company_registry_utils::optional")]
    pub hiring_count: Option<i32>,
    #[serde(default, deserialize_with = "company_registry_utils::optional")]
    pub starting_salary: Option<i64>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_text")]
    pub bonus: Option<String>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_text")]
    pub work_location: Option<String>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_text")]
    pub working_hours: Option<String>,
    #[serde(default, deserialize_with = "company_registry_utils::optional")]
    pub annual_holidays: Option<i32>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_text")]
    pub benefits: Option<String>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_float")]
    pub turnover_rate: Option<f64>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_float")]
    pub average_age: Option<f64>,
    #[serde(default, deserialize_with = "company_registry_utils::optional")]
    pub average_annual_salary: Option<i64>,
    #[serde(default, deserialize_with = "company_registry_utils::optional_text")]
    pub notes: Option<String>,
}

impl CompanyProfile {
    pub fn new<T: Into<String>>(company_name: T) -> Self {
        Self {
            company_name: company_name.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), InvalidCompanyError> {
        if self.company_name.trim().is_empty() {
            return Err(InvalidCompanyError::MissingName);
        }
        Ok(())
    }

    /// Sets exactly the fields present in the patch
    pub fn apply(&mut self, patch: &CompanyPatch) {
        fn set<T: Clone>(field: &mut Option<T>, value: &Option<Option<T>>) {
            if let Some(value) = value {
                *field = value.clone();
            }
        }

        if let Some(name) = &patch.company_name {
            self.company_name = name.clone();
        }
        set(&mut self.corporate_philosophy, &patch.corporate_philosophy);
        set(&mut self.ceo_name, &patch.ceo_name);
        set(&mut self.headquarters, &patch.headquarters);
        set(&mut self.founded_date, &patch.founded_date);
        set(&mut self.employees, &patch.employees);
        set(&mut self.major_clients, &patch.major_clients);
        set(&mut self.capital, &patch.capital);
        set(&mut self.sales, &patch.sales);
        set(&mut self.roe, &patch.roe);
        set(&mut self.operating_profit_margin, &patch.operating_profit_margin);
        set(&mut self.main_business, &patch.main_business);
        set(&mut self.strengths, &patch.strengths);
        set(&mut self.weaknesses, &patch.weaknesses);
        set(&mut self.target_customers, &patch.target_customers);
        set(&mut self.ideal_candidate, &patch.ideal_candidate);
        set(&mut self.recruiting_positions, &patch.recruiting_positions);
        set(&mut self.hiring_count, &patch.hiring_count);
        set(&mut self.starting_salary, &patch.starting_salary);
        set(&mut self.bonus, &patch.bonus);
        set(&mut self.work_location, &patch.work_location);
        set(&mut self.working_hours, &patch.working_hours);
        set(&mut self.annual_holidays, &patch.annual_holidays);
        set(&mut self.benefits, &patch.benefits);
        set(&mut self.turnover_rate, &patch.turnover_rate);
        set(&mut self.average_age, &patch.average_age);
        set(&mut self.average_annual_salary, &patch.average_annual_salary);
        set(&mut self.notes, &patch.notes);
    }
}

/// Partial update of a `CompanyProfile`.
///
/// `None` leaves the field untouched, `Some(None)` clears it and
/// `Some(Some(value))` sets it. The name can only be replaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub corporate_philosophy: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub ceo_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub headquarters: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch",
        skip_serializing_if = "Option::is_none"
    )]
    pub founded_date: Option<Option<NaiveDate>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch",
        skip_serializing_if = "Option::is_none"
    )]
    pub employees: Option<Option<i32>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub major_clients: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch",
        skip_serializing_if = "Option::is_none"
    )]
    pub capital: Option<Option<i64>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch",
        skip_serializing_if = "Option::is_none"
    )]
    pub sales: Option<Option<i64>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_float",
        skip_serializing_if = "Option::is_none"
    )]
    pub roe: Option<Option<f64>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_float",
        skip_serializing_if = "Option::is_none"
    )]
    pub operating_profit_margin: Option<Option<f64>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub main_business: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub strengths: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub weaknesses: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_customers: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub ideal_candidate: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub recruiting_positions: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch",
        skip_serializing_if = "Option::is_none"
    )]
    pub hiring_count: Option<Option<i32>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch",
        skip_serializing_if = "Option::is_none"
    )]
    pub starting_salary: Option<Option<i64>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub bonus: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub work_location: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub working_hours: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch",
        skip_serializing_if = "Option::is_none"
    )]
    pub annual_holidays: Option<Option<i32>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub benefits: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_float",
        skip_serializing_if = "Option::is_none"
    )]
    pub turnover_rate: Option<Option<f64>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_float",
        skip_serializing_if = "Option::is_none"
    )]
    pub average_age: Option<Option<f64>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch",
        skip_serializing_if = "Option::is_none"
    )]
    pub average_annual_salary: Option<Option<i64>>,
    #[serde(
        default,
        deserialize_with = "company_registry_utils::patch_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
}

impl CompanyPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<(), InvalidCompanyError> {
        if self.is_empty() {
            return Err(InvalidCompanyError::EmptyPatch);
        }
        match &self.company_name {
            Some(name) if name.trim().is_empty() => Err(InvalidCompanyError::MissingName),
            _ => Ok(()),
        }
    }
}

impl From<CompanyProfile> for CompanyPatch {
    fn from(p: CompanyProfile) -> Self {
        Self {
            company_name: Some(p.company_name),
            corporate_philosophy: Some(p.corporate_philosophy),
            ceo_name: Some(p.ceo_name),
            headquarters: Some(p.headquarters),
            founded_date: Some(p.founded_date),
            employees: Some(p.employees),
            major_clients: Some(p.major_clients),
            capital: Some(p.capital),
            sales: Some(p.sales),
            roe: Some(p.roe),
            operating_profit_margin: Some(p.operating_profit_margin),
            main_business: Some(p.main_business),
            strengths: Some(p.strengths),
            weaknesses: Some(p.weaknesses),
            target_customers: Some(p.target_customers),
            ideal_candidate: Some(p.ideal_candidate),
            recruiting_positions: Some(p.recruiting_positions),
            hiring_count: Some(p.hiring_count),
            starting_salary: Some(p.starting_salary),
            bonus: Some(p.bonus),
            work_location: Some(p.work_location),
            working_hours: Some(p.working_hours),
            annual_holidays: Some(p.annual_holidays),
            benefits: Some(p.benefits),
            turnover_rate: Some(p.turnover_rate),
            average_age: Some(p.average_age),
            average_annual_salary: Some(p.average_annual_salary),
            notes: Some(p.notes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> CompanyProfile {
        CompanyProfile {
            sales: Some(120_000),
            employees: Some(340),
            headquarters: Some("Osaka".into()),
            ..CompanyProfile::new("Acme")
        }
    }

    #[test]
    fn it_parses_form_style_profile() {
        let profile: CompanyProfile = serde_json::from_str(
            r#"{
                "companyName": "Acme",
                "foundedDate": "1998-04-01",
                "employees": "340",
                "roe": "",
                "notes": "",
                "someUnknownKey": "ignored"
            }"#,
        )
        .unwrap();
        assert_eq!(profile.company_name, "Acme");
        assert_eq!(profile.founded_date, NaiveDate::from_ymd_opt(1998, 4, 1));
        assert_eq!(profile.employees, Some(340));
        assert!(profile.roe.is_none());
        assert!(profile.notes.is_none());
    }

    #[test]
    fn it_rejects_non_finite_ratios() {
        let res = serde_json::from_str::<CompanyProfile>(
            r#"{"companyName": "Acme", "roe": "NaN", "turnoverRate": "inf"}"#,
        );
        assert!(res.is_err());
        let res = serde_json::from_str::<CompanyPatch>(r#"{"averageAge": "-inf"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn it_requires_a_company_name() {
        assert!(serde_json::from_str::<CompanyProfile>(r#"{"ceoName": "X"}"#).is_err());
        assert_eq!(
            CompanyProfile::new("  ").validate(),
            Err(InvalidCompanyError::MissingName)
        );
        assert!(acme().validate().is_ok());
    }

    #[test]
    fn it_applies_only_supplied_fields() {
        let mut profile = acme();
        let patch: CompanyPatch =
            serde_json::from_str(r#"{"employees": 400, "headquarters": ""}"#).unwrap();
        profile.apply(&patch);

        assert_eq!(profile.employees, Some(400));
        assert!(profile.headquarters.is_none());
        assert_eq!(profile.company_name, "Acme");
        assert_eq!(profile.sales, Some(120_000));
    }

    #[test]
    fn it_rejects_empty_patches() {
        let patch: CompanyPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
        assert_eq!(patch.validate(), Err(InvalidCompanyError::EmptyPatch));

        let patch = CompanyPatch {
            company_name: Some("".into()),
            ..Default::default()
        };
        assert_eq!(patch.validate(), Err(InvalidCompanyError::MissingName));
    }

    #[test]
    fn full_patch_reproduces_profile() {
        let mut profile = CompanyProfile::new("Other");
        profile.notes = Some("stale".into());
        profile.apply(&CompanyPatch::from(acme()));
        assert_eq!(profile, acme());
    }

    #[test]
    fn patch_serializes_only_supplied_fields() {
        let patch = CompanyPatch {
            roe: Some(Some(5.5)),
            notes: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "roe": 5.5, "notes": null }));
    }
}
