//! Predicate filtering over candidate and job snapshots.
//!
//! Every criterion is optional and an unset criterion always passes, so a
//! default criteria value returns its input untouched. Active criteria are
//! ANDed and the relative order of the input is preserved.

use crate::models::candidate::{CandidateRecord, EmploymentPreference, WorkModePreference};
use crate::models::job::{EmploymentType, JobRecord, JobStatus, WorkMode};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Free text matched against the candidate's name or any skill.
    pub search: Option<String>,
    /// Passes when any stored skill contains any of these.
    pub skills: Vec<String>,
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
    pub employment_type: Option<EmploymentPreference>,
    pub work_mode: Option<WorkModePreference>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        normalized_term(self.search.as_deref()).is_none()
            && normalized_terms(&self.skills).is_empty()
            && self.age_min.is_none()
            && self.age_max.is_none()
            && self.employment_type.is_none()
            && self.work_mode.is_none()
    }

    pub fn matches(&self, candidate: &CandidateRecord) -> bool {
        if let Some(term) = normalized_term(self.search.as_deref()) {
            let in_name = contains_ci(&candidate.name, &term);
            if !in_name && !candidate.skills.iter().any(|skill| contains_ci(skill, &term)) {
                return false;
            }
        }

        let wanted = normalized_terms(&self.skills);
        if !wanted.is_empty() && !any_skill_matches(&candidate.skills, &wanted) {
            return false;
        }

        if let Some(min) = self.age_min {
            if !candidate.age.is_some_and(|age| age >= min) {
                return false;
            }
        }

        if let Some(max) = self.age_max {
            if !candidate.age.is_some_and(|age| age <= max) {
                return false;
            }
        }

        if let Some(requested) = self.employment_type {
            if !candidate.job_preferences.accepts_employment(requested) {
                return false;
            }
        }

        if let Some(requested) = self.work_mode {
            if !candidate.job_preferences.accepts_work_mode(requested) {
                return false;
            }
        }

        true
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilterCriteria {
    /// Free text matched against title, description or any required skill.
    pub search: Option<String>,
    pub skills: Vec<String>,
    pub employment_type: Option<EmploymentType>,
    pub work_mode: Option<WorkMode>,
    pub min_experience: Option<u32>,
    pub max_experience: Option<u32>,
    pub status: Option<JobStatus>,
}

impl JobFilterCriteria {
    pub fn matches(&self, job: &JobRecord) -> bool {
        if let Some(term) = normalized_term(self.search.as_deref()) {
            let hit = contains_ci(&job.title, &term)
                || contains_ci(&job.description, &term)
                || job.required_skills.iter().any(|skill| contains_ci(skill, &term));
            if !hit {
                return false;
            }
        }

        let wanted = normalized_terms(&self.skills);
        if !wanted.is_empty() && !any_skill_matches(&job.required_skills, &wanted) {
            return false;
        }

        if self.employment_type.is_some_and(|t| t != job.employment_type) {
            return false;
        }
        if self.work_mode.is_some_and(|m| m != job.work_mode) {
            return false;
        }
        if self.min_experience.is_some_and(|min| job.experience_required < min) {
            return false;
        }
        if self.max_experience.is_some_and(|max| job.experience_required > max) {
            return false;
        }
        if self.status.is_some_and(|s| s != job.status) {
            return false;
        }

        true
    }
}

pub fn filter_candidates(
    candidates: Vec<CandidateRecord>,
    criteria: &FilterCriteria,
) -> Vec<CandidateRecord> {
    if criteria.is_empty() {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|candidate| criteria.matches(candidate))
        .collect()
}

pub fn filter_jobs(jobs: Vec<JobRecord>, criteria: &JobFilterCriteria) -> Vec<JobRecord> {
    jobs.into_iter().filter(|job| criteria.matches(job)).collect()
}

fn normalized_term(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
}

fn normalized_terms(raw: &[String]) -> Vec<String> {
    raw.iter()
        .filter_map(|term| normalized_term(Some(term)))
        .collect()
}

/// `needle` must already be lowercase.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn any_skill_matches(skills: &[String], wanted: &[String]) -> bool {
    skills
        .iter()
        .any(|skill| wanted.iter().any(|term| contains_ci(skill, term)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::JobPreferences;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn candidate(
        name: &str,
        age: Option<u32>,
        skills: &[&str],
        employment_type: EmploymentPreference,
        work_mode: WorkModePreference,
    ) -> CandidateRecord {
        CandidateRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            age,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: None,
            job_preferences: JobPreferences {
                employment_type,
                work_mode,
            },
            created_at: None,
            updated_at: None,
        }
    }

    fn roster() -> Vec<CandidateRecord> {
        vec![
            candidate(
                "Amal",
                Some(22),
                &["React"],
                EmploymentPreference::Both,
                WorkModePreference::Remote,
            ),
            candidate(
                "Nadeesha",
                Some(30),
                &["Python"],
                EmploymentPreference::FullTime,
                WorkModePreference::Onsite,
            ),
            candidate(
                "Kasun",
                None,
                &["TypeScript", "react native"],
                EmploymentPreference::PartTime,
                WorkModePreference::Any,
            ),
        ]
    }

    fn names(candidates: &[CandidateRecord]) -> Vec<&str> {
        candidates.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let input = roster();
        let output = filter_candidates(input.clone(), &FilterCriteria::default());
        assert_eq!(output, input);
    }

    #[test]
    fn work_mode_remote_keeps_remote_and_any() {
        let criteria = FilterCriteria {
            work_mode: Some(WorkModePreference::Remote),
            ..FilterCriteria::default()
        };
        let output = filter_candidates(roster(), &criteria);
        assert_eq!(names(&output), vec!["Amal", "Kasun"]);
    }

    #[test]
    fn work_mode_scenario_from_two_candidates() {
        let input: Vec<_> = roster().into_iter().take(2).collect();
        let criteria = FilterCriteria {
            work_mode: Some(WorkModePreference::Remote),
            ..FilterCriteria::default()
        };
        assert_eq!(names(&filter_candidates(input, &criteria)), vec!["Amal"]);
    }

    #[test]
    fn both_preference_passes_every_employment_filter() {
        for requested in [
            EmploymentPreference::FullTime,
            EmploymentPreference::PartTime,
            EmploymentPreference::Both,
        ] {
            let criteria = FilterCriteria {
                employment_type: Some(requested),
                ..FilterCriteria::default()
            };
            let output = filter_candidates(roster(), &criteria);
            assert!(names(&output).contains(&"Amal"), "requested {requested:?}");
        }
    }

    #[test]
    fn age_bound_excludes_missing_ages() {
        let criteria = FilterCriteria {
            age_min: Some(18),
            ..FilterCriteria::default()
        };
        let output = filter_candidates(roster(), &criteria);
        assert_eq!(names(&output), vec!["Amal", "Nadeesha"]);

        let criteria = FilterCriteria {
            age_max: Some(25),
            ..FilterCriteria::default()
        };
        assert_eq!(names(&filter_candidates(roster(), &criteria)), vec!["Amal"]);
    }

    #[test]
    fn raising_age_min_is_monotonic() {
        let mut previous: Option<Vec<String>> = None;
        for bound in 0..40 {
            let criteria = FilterCriteria {
                age_min: Some(bound),
                ..FilterCriteria::default()
            };
            let current: Vec<String> = filter_candidates(roster(), &criteria)
                .into_iter()
                .map(|c| c.name)
                .collect();
            if let Some(prev) = &previous {
                assert!(current.iter().all(|name| prev.contains(name)));
            }
            previous = Some(current);
        }
    }

    #[test]
    fn search_matches_name_or_skill_case_insensitively() {
        let criteria = FilterCriteria {
            search: Some("  REACT ".into()),
            ..FilterCriteria::default()
        };
        assert_eq!(
            names(&filter_candidates(roster(), &criteria)),
            vec!["Amal", "Kasun"]
        );

        let criteria = FilterCriteria {
            search: Some("nadee".into()),
            ..FilterCriteria::default()
        };
        assert_eq!(
            names(&filter_candidates(roster(), &criteria)),
            vec!["Nadeesha"]
        );
    }

    #[test]
    fn skills_list_uses_substring_any_match() {
        let criteria = FilterCriteria {
            skills: vec!["py".into(), "script".into()],
            ..FilterCriteria::default()
        };
        assert_eq!(
            names(&filter_candidates(roster(), &criteria)),
            vec!["Nadeesha", "Kasun"]
        );
    }

    #[test]
    fn predicates_are_anded() {
        let criteria = FilterCriteria {
            skills: vec!["react".into()],
            employment_type: Some(EmploymentPreference::FullTime),
            ..FilterCriteria::default()
        };
        assert_eq!(names(&filter_candidates(roster(), &criteria)), vec!["Amal"]);
    }

    fn job(title: &str, employment_type: EmploymentType, work_mode: WorkMode, years: u32) -> JobRecord {
        JobRecord {
            id: Uuid::new_v4(),
            employer_id: Uuid::nil(),
            title: title.to_string(),
            description: format!("{title} role"),
            company_name: "Acme".into(),
            required_skills: vec!["Rust".into(), "SQL".into()],
            experience_required: years,
            employment_type,
            work_mode,
            location: None,
            status: JobStatus::Open,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn jobs_filter_on_type_mode_and_experience() {
        let jobs = vec![
            job("Backend Engineer", EmploymentType::FullTime, WorkMode::Remote, 3),
            job("Data Intern", EmploymentType::Internship, WorkMode::Onsite, 0),
            job("Platform Lead", EmploymentType::FullTime, WorkMode::Hybrid, 8),
        ];

        let criteria = JobFilterCriteria {
            employment_type: Some(EmploymentType::FullTime),
            max_experience: Some(5),
            ..JobFilterCriteria::default()
        };
        let titles: Vec<_> = filter_jobs(jobs.clone(), &criteria)
            .into_iter()
            .map(|j| j.title)
            .collect();
        assert_eq!(titles, vec!["Backend Engineer"]);

        let criteria = JobFilterCriteria {
            search: Some("sql".into()),
            work_mode: Some(WorkMode::Onsite),
            ..JobFilterCriteria::default()
        };
        let titles: Vec<_> = filter_jobs(jobs.clone(), &criteria)
            .into_iter()
            .map(|j| j.title)
            .collect();
        assert_eq!(titles, vec!["Data Intern"]);

        assert_eq!(filter_jobs(jobs.clone(), &JobFilterCriteria::default()), jobs);
    }

    #[test]
    fn jobs_filter_on_status() {
        let mut closed = job("Archived", EmploymentType::Contract, WorkMode::Remote, 1);
        closed.status = JobStatus::Closed;
        let jobs = vec![closed, job("Live", EmploymentType::Contract, WorkMode::Remote, 1)];

        let criteria = JobFilterCriteria {
            status: Some(JobStatus::Open),
            ..JobFilterCriteria::default()
        };
        let output = filter_jobs(jobs, &criteria);
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].title, "Live");
    }
}
