use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::database::store::RecruitmentStore;
use crate::dto::analytics_dto::{
    AgeBucket, Demographics, ExperienceBucket, JobMetric, MonthlyBucket, SkillCount,
    SystemStats, TimeToHire,
};
use crate::error::Result;
use crate::models::application::{ApplicationRecord, ApplicationStatus};
use crate::models::candidate::CandidateRecord;
use crate::models::interview::InterviewStatus;
use crate::models::job::{JobRecord, JobStatus};
use crate::utils::time::{elapsed_days_floor, month_key, months_before};

pub const TOP_SKILLS_LIMIT: usize = 10;

const AGE_BUCKETS: [(&str, u32, u32); 5] = [
    ("18-25", 18, 25),
    ("26-35", 26, 35),
    ("36-45", 36, 45),
    ("46-55", 46, 55),
    ("55+", 56, u32::MAX),
];

const EXPERIENCE_BUCKETS: [(&str, u32, u32); 4] = [
    ("Entry (0-2 years)", 0, 2),
    ("Mid (3-5 years)", 3, 5),
    ("Senior (6-10 years)", 6, 10),
    ("Expert (10+ years)", 11, u32::MAX),
];

/// Look-back window for the hiring trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendPeriod {
    OneMonth,
    ThreeMonths,
    #[default]
    SixMonths,
    OneYear,
}

impl TrendPeriod {
    /// Unknown or missing periods fall back to six months.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
            Some("1month") => Self::OneMonth,
            Some("3months") => Self::ThreeMonths,
            Some("6months") => Self::SixMonths,
            Some("1year") | Some("12months") => Self::OneYear,
            _ => Self::SixMonths,
        }
    }

    pub fn months(self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::OneYear => 12,
        }
    }

    pub fn start_from(self, now: DateTime<Utc>) -> DateTime<Utc> {
        months_before(now, self.months())
    }
}

#[derive(Default)]
struct MonthTally {
    total: u64,
    reviewed: u64,
    shortlisted: u64,
    rejected: u64,
}

/// Per-month application counts since `from`, oldest month first.
///
/// Only months that contain at least one application are emitted; gaps are
/// not zero-filled.
pub fn compute_hiring_trend(
    applications: &[ApplicationRecord],
    from: DateTime<Utc>,
) -> Vec<MonthlyBucket> {
    let mut months: BTreeMap<(i32, u32), MonthTally> = BTreeMap::new();

    for application in applications.iter().filter(|a| a.created_at >= from) {
        let tally = months.entry(month_key(application.created_at)).or_default();
        tally.total += 1;
        match application.status {
            ApplicationStatus::Reviewed => tally.reviewed += 1,
            ApplicationStatus::Shortlisted => tally.shortlisted += 1,
            ApplicationStatus::Rejected => tally.rejected += 1,
            ApplicationStatus::Pending | ApplicationStatus::Accepted => {}
        }
    }

    months
        .into_iter()
        .map(|((year, month), tally)| MonthlyBucket {
            month: format!("{year}-{month:02}"),
            total: tally.total,
            reviewed: tally.reviewed,
            shortlisted: tally.shortlisted,
            rejected: tally.rejected,
        })
        .collect()
}

/// Average days from posting to shortlisting for each closed job.
///
/// Jobs without shortlisted applications are left out. The overall figure is
/// the plain mean of the per-job averages, not weighted by applicant count.
pub fn compute_time_to_hire(
    closed_jobs: &[JobRecord],
    shortlisted_applications: &[ApplicationRecord],
) -> TimeToHire {
    let job_metrics: Vec<JobMetric> = closed_jobs
        .iter()
        .filter(|job| job.status == JobStatus::Closed)
        .filter_map(|job| {
            let elapsed: Vec<i64> = shortlisted_applications
                .iter()
                .filter(|a| a.job_id == job.id && a.status == ApplicationStatus::Shortlisted)
                .map(|a| elapsed_days_floor(job.created_at, a.created_at))
                .collect();

            if elapsed.is_empty() {
                return None;
            }

            let mean = elapsed.iter().sum::<i64>() as f64 / elapsed.len() as f64;
            Some(JobMetric {
                job_title: job.title.clone(),
                applicants: elapsed.len() as u64,
                avg_days: round_half_up(mean),
                posted_date: job.created_at.date_naive(),
            })
        })
        .collect();

    let overall_average = if job_metrics.is_empty() {
        0
    } else {
        let sum: i64 = job_metrics.iter().map(|m| m.avg_days).sum();
        round_half_up(sum as f64 / job_metrics.len() as f64)
    };

    TimeToHire {
        overall_average,
        job_metrics,
    }
}

/// Age, skill and experience breakdown over one candidate per application.
///
/// A candidate who applied twice is counted twice.
pub fn compute_demographics<'a, I>(applicants: I) -> Demographics
where
    I: IntoIterator<Item = &'a CandidateRecord>,
{
    let mut total_applicants = 0u64;
    let mut age_counts = [0u64; AGE_BUCKETS.len()];
    let mut experience_counts = [0u64; EXPERIENCE_BUCKETS.len()];
    let mut skill_counts: Vec<(&'a str, u64)> = Vec::new();
    let mut skill_index: HashMap<&'a str, usize> = HashMap::new();

    for candidate in applicants {
        total_applicants += 1;

        if let Some(age) = candidate.age {
            if let Some(slot) = bucket_index(&AGE_BUCKETS, age) {
                age_counts[slot] += 1;
            }
        }

        let experience = candidate.experience.unwrap_or(0);
        if let Some(slot) = bucket_index(&EXPERIENCE_BUCKETS, experience) {
            experience_counts[slot] += 1;
        }

        for skill in &candidate.skills {
            match skill_index.get(skill.as_str()) {
                Some(&slot) => skill_counts[slot].1 += 1,
                None => {
                    skill_index.insert(skill.as_str(), skill_counts.len());
                    skill_counts.push((skill.as_str(), 1));
                }
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    skill_counts.sort_by(|a, b| b.1.cmp(&a.1));
    skill_counts.truncate(TOP_SKILLS_LIMIT);

    Demographics {
        total_applicants,
        age_distribution: AGE_BUCKETS
            .iter()
            .zip(age_counts)
            .map(|((range, _, _), count)| AgeBucket {
                range: range.to_string(),
                count,
            })
            .collect(),
        top_skills: skill_counts
            .into_iter()
            .map(|(skill, count)| SkillCount {
                skill: skill.to_string(),
                count,
            })
            .collect(),
        experience_distribution: EXPERIENCE_BUCKETS
            .iter()
            .zip(experience_counts)
            .map(|((level, _, _), count)| ExperienceBucket {
                level: level.to_string(),
                count,
            })
            .collect(),
    }
}

fn bucket_index(buckets: &[(&str, u32, u32)], value: u32) -> Option<usize> {
    buckets
        .iter()
        .position(|(_, low, high)| (*low..=*high).contains(&value))
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Store-backed analytics, scoped to one employer's jobs or to everything.
#[derive(Clone)]
pub struct AnalyticsService {
    store: Arc<dyn RecruitmentStore>,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn RecruitmentStore>) -> Self {
        Self { store }
    }

    fn scoped_jobs(&self, employer_id: Option<Uuid>) -> Result<Vec<JobRecord>> {
        let jobs = self.store.jobs()?;
        Ok(match employer_id {
            Some(owner) => jobs.into_iter().filter(|j| j.is_owned_by(owner)).collect(),
            None => jobs,
        })
    }

    pub fn hiring_trend(
        &self,
        employer_id: Option<Uuid>,
        period: TrendPeriod,
        now: DateTime<Utc>,
    ) -> Result<Vec<MonthlyBucket>> {
        let job_ids: HashSet<Uuid> = self
            .scoped_jobs(employer_id)?
            .into_iter()
            .map(|j| j.id)
            .collect();
        let applications: Vec<ApplicationRecord> = self
            .store
            .applications()?
            .into_iter()
            .filter(|a| job_ids.contains(&a.job_id))
            .collect();

        let trend = compute_hiring_trend(&applications, period.start_from(now));
        tracing::debug!(
            months = trend.len(),
            applications = applications.len(),
            ?period,
            "computed hiring trend"
        );
        Ok(trend)
    }

    pub fn time_to_hire(&self, employer_id: Option<Uuid>) -> Result<TimeToHire> {
        let closed_jobs: Vec<JobRecord> = self
            .scoped_jobs(employer_id)?
            .into_iter()
            .filter(|j| j.status == JobStatus::Closed)
            .collect();
        let closed_ids: HashSet<Uuid> = closed_jobs.iter().map(|j| j.id).collect();
        let shortlisted: Vec<ApplicationRecord> = self
            .store
            .applications()?
            .into_iter()
            .filter(|a| a.status == ApplicationStatus::Shortlisted && closed_ids.contains(&a.job_id))
            .collect();

        let metrics = compute_time_to_hire(&closed_jobs, &shortlisted);
        tracing::debug!(
            jobs = metrics.job_metrics.len(),
            overall_average = metrics.overall_average,
            "computed time to hire"
        );
        Ok(metrics)
    }

    pub fn demographics(&self, employer_id: Option<Uuid>) -> Result<Demographics> {
        let mut applications = self.store.applications()?;
        if employer_id.is_some() {
            let job_ids: HashSet<Uuid> = self
                .scoped_jobs(employer_id)?
                .into_iter()
                .map(|j| j.id)
                .collect();
            applications.retain(|a| job_ids.contains(&a.job_id));
        }

        let candidates: HashMap<Uuid, CandidateRecord> = self
            .store
            .candidates()?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let demographics = compute_demographics(
            applications
                .iter()
                .filter_map(|a| candidates.get(&a.candidate_id)),
        );
        tracing::debug!(
            total_applicants = demographics.total_applicants,
            "computed demographics"
        );
        Ok(demographics)
    }

    /// Users are the stored candidate profiles plus every distinct employer
    /// that has posted a job.
    pub fn system_stats(&self, now: DateTime<Utc>) -> Result<SystemStats> {
        let candidates = self.store.candidates()?;
        let jobs = self.store.jobs()?;
        let applications = self.store.applications()?;
        let interviews = self.store.interviews()?;

        let employers: HashSet<Uuid> = jobs.iter().map(|j| j.employer_id).collect();
        let today = now.date_naive();
        let count = |n: usize| n as u64;

        let stats = SystemStats {
            total_users: count(candidates.len() + employers.len()),
            total_candidates: count(candidates.len()),
            total_employers: count(employers.len()),
            total_jobs: count(jobs.len()),
            active_jobs: count(jobs.iter().filter(|j| j.status == JobStatus::Open).count()),
            total_applications: count(applications.len()),
            pending_applications: count(
                applications
                    .iter()
                    .filter(|a| a.status == ApplicationStatus::Pending)
                    .count(),
            ),
            total_interviews: count(interviews.len()),
            upcoming_interviews: count(
                interviews
                    .iter()
                    .filter(|i| i.status == InterviewStatus::Scheduled && i.date >= today)
                    .count(),
            ),
        };
        tracing::debug!(?stats, "computed system stats");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::store::MockRecruitmentStore;
    use crate::models::candidate::JobPreferences;
    use crate::models::job::{EmploymentType, WorkMode};
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap()
    }

    fn application(job_id: Uuid, status: ApplicationStatus, created_at: DateTime<Utc>) -> ApplicationRecord {
        ApplicationRecord {
            id: Uuid::new_v4(),
            job_id,
            candidate_id: Uuid::new_v4(),
            status,
            cover_letter: None,
            notes: None,
            created_at,
            reviewed_at: None,
        }
    }

    fn job(title: &str, status: JobStatus, created_at: DateTime<Utc>) -> JobRecord {
        JobRecord {
            id: Uuid::new_v4(),
            employer_id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            company_name: String::new(),
            required_skills: Vec::new(),
            experience_required: 0,
            employment_type: EmploymentType::FullTime,
            work_mode: WorkMode::Onsite,
            location: None,
            status,
            created_at,
            updated_at: None,
        }
    }

    fn applicant(age: Option<u32>, skills: &[&str], experience: Option<u32>) -> CandidateRecord {
        CandidateRecord {
            id: Uuid::new_v4(),
            name: "Applicant".into(),
            age,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience,
            job_preferences: JobPreferences::default(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn trend_period_parsing_defaults_to_six_months() {
        assert_eq!(TrendPeriod::parse(Some("1month")), TrendPeriod::OneMonth);
        assert_eq!(TrendPeriod::parse(Some("3months")), TrendPeriod::ThreeMonths);
        assert_eq!(TrendPeriod::parse(Some("1YEAR")), TrendPeriod::OneYear);
        assert_eq!(TrendPeriod::parse(Some("fortnight")), TrendPeriod::SixMonths);
        assert_eq!(TrendPeriod::parse(None), TrendPeriod::SixMonths);
    }

    #[test]
    fn hiring_trend_of_nothing_is_empty() {
        assert!(compute_hiring_trend(&[], at(2020, 1, 1)).is_empty());
    }

    #[test]
    fn hiring_trend_groups_one_month() {
        let job_id = Uuid::new_v4();
        let apps = vec![
            application(job_id, ApplicationStatus::Reviewed, at(2024, 1, 15)),
            application(job_id, ApplicationStatus::Shortlisted, at(2024, 1, 20)),
        ];

        let trend = compute_hiring_trend(&apps, at(2023, 12, 1));
        assert_eq!(
            trend,
            vec![MonthlyBucket {
                month: "2024-01".into(),
                total: 2,
                reviewed: 1,
                shortlisted: 1,
                rejected: 0,
            }]
        );
    }

    #[test]
    fn hiring_trend_is_sorted_and_skips_empty_months() {
        let job_id = Uuid::new_v4();
        let apps = vec![
            application(job_id, ApplicationStatus::Rejected, at(2024, 4, 2)),
            application(job_id, ApplicationStatus::Pending, at(2023, 11, 30)),
            application(job_id, ApplicationStatus::Accepted, at(2024, 1, 5)),
            application(job_id, ApplicationStatus::Reviewed, at(2023, 6, 1)),
        ];

        let trend = compute_hiring_trend(&apps, at(2023, 10, 1));
        let months: Vec<_> = trend.iter().map(|b| b.month.as_str()).collect();
        assert_eq!(months, vec!["2023-11", "2024-01", "2024-04"]);
        assert_eq!(trend[2].rejected, 1);
        assert_eq!(trend[1].total, 1);
        assert_eq!(trend[1].reviewed + trend[1].shortlisted + trend[1].rejected, 0);
    }

    #[test]
    fn time_to_hire_without_closed_jobs_is_zero() {
        let open = job("Open role", JobStatus::Open, at(2024, 1, 1));
        let apps = vec![application(open.id, ApplicationStatus::Shortlisted, at(2024, 1, 5))];
        assert_eq!(compute_time_to_hire(&[open], &apps), TimeToHire::default());
        assert_eq!(compute_time_to_hire(&[], &[]), TimeToHire::default());
    }

    #[test]
    fn time_to_hire_single_job_scenario() {
        let closed = job("Backend Engineer", JobStatus::Closed, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let apps = vec![application(
            closed.id,
            ApplicationStatus::Shortlisted,
            Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap(),
        )];

        let metrics = compute_time_to_hire(std::slice::from_ref(&closed), &apps);
        assert_eq!(metrics.overall_average, 10);
        assert_eq!(
            metrics.job_metrics,
            vec![JobMetric {
                job_title: "Backend Engineer".into(),
                applicants: 1,
                avg_days: 10,
                posted_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            }]
        );
    }

    #[test]
    fn time_to_hire_is_a_mean_of_means() {
        let first = job("First", JobStatus::Closed, at(2024, 1, 1));
        let second = job("Second", JobStatus::Closed, at(2024, 2, 1));
        let skipped = job("No shortlist", JobStatus::Closed, at(2024, 2, 1));
        let apps = vec![
            application(first.id, ApplicationStatus::Shortlisted, at(2024, 1, 3)),
            application(first.id, ApplicationStatus::Shortlisted, at(2024, 1, 5)),
            application(first.id, ApplicationStatus::Shortlisted, at(2024, 1, 7)),
            application(second.id, ApplicationStatus::Shortlisted, at(2024, 2, 21)),
            application(skipped.id, ApplicationStatus::Rejected, at(2024, 2, 3)),
        ];

        let metrics = compute_time_to_hire(&[first, second, skipped], &apps);
        let per_job: Vec<_> = metrics
            .job_metrics
            .iter()
            .map(|m| (m.job_title.as_str(), m.applicants, m.avg_days))
            .collect();
        assert_eq!(per_job, vec![("First", 3, 4), ("Second", 1, 20)]);
        assert_eq!(metrics.overall_average, 12);
    }

    #[test]
    fn age_distribution_scenario() {
        let applicants = [
            applicant(Some(20), &[], None),
            applicant(Some(40), &[], None),
            applicant(Some(60), &[], None),
        ];
        let demographics = compute_demographics(applicants.iter());
        let counts: Vec<_> = demographics
            .age_distribution
            .iter()
            .map(|b| (b.range.as_str(), b.count))
            .collect();
        assert_eq!(
            counts,
            vec![("18-25", 1), ("26-35", 0), ("36-45", 1), ("46-55", 0), ("55+", 1)]
        );
    }

    #[test]
    fn age_edges_and_missing_ages() {
        let applicants = [
            applicant(Some(17), &[], None),
            applicant(Some(25), &[], None),
            applicant(Some(55), &[], None),
            applicant(Some(56), &[], None),
            applicant(None, &[], None),
        ];
        let demographics = compute_demographics(applicants.iter());
        let counts: Vec<u64> = demographics.age_distribution.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 0, 0, 1, 1]);
        assert_eq!(demographics.total_applicants, 5);
    }

    #[test]
    fn experience_defaults_to_entry() {
        let applicants = [
            applicant(None, &[], None),
            applicant(None, &[], Some(2)),
            applicant(None, &[], Some(5)),
            applicant(None, &[], Some(10)),
            applicant(None, &[], Some(11)),
        ];
        let demographics = compute_demographics(applicants.iter());
        let counts: Vec<_> = demographics
            .experience_distribution
            .iter()
            .map(|b| (b.level.as_str(), b.count))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("Entry (0-2 years)", 2),
                ("Mid (3-5 years)", 1),
                ("Senior (6-10 years)", 1),
                ("Expert (10+ years)", 1),
            ]
        );
    }

    #[test]
    fn fractional_ages_fall_in_no_bucket() {
        let stored: CandidateRecord = serde_json::from_value(serde_json::json!({
            "id": Uuid::new_v4(),
            "name": "Half",
            "age": 25.5,
            "experience": 10.5
        }))
        .expect("candidate parses");
        assert_eq!(stored.age, None);
        assert_eq!(stored.experience, None);

        let demographics = compute_demographics([&stored]);
        let ages: Vec<u64> = demographics.age_distribution.iter().map(|b| b.count).collect();
        assert_eq!(ages, vec![0, 0, 0, 0, 0]);
        let levels: Vec<u64> = demographics
            .experience_distribution
            .iter()
            .map(|b| b.count)
            .collect();
        assert_eq!(levels, vec![1, 0, 0, 0]);
    }

    #[test]
    fn top_skills_are_case_sensitive_sorted_and_capped() {
        let mut applicants = vec![
            applicant(None, &["Rust", "rust", "Go"], None),
            applicant(None, &["Go", "Rust"], None),
            applicant(None, &["SQL"], None),
        ];
        for i in 0..12 {
            let name = format!("Skill{i}");
            applicants.push(applicant(None, &[name.as_str()], None));
        }

        let demographics = compute_demographics(applicants.iter());
        let top: Vec<_> = demographics
            .top_skills
            .iter()
            .map(|s| (s.skill.as_str(), s.count))
            .collect();

        assert_eq!(top.len(), TOP_SKILLS_LIMIT);
        assert_eq!(top[0], ("Rust", 2));
        assert_eq!(top[1], ("Go", 2));
        assert_eq!(top[2], ("rust", 1));
        assert_eq!(top[3], ("SQL", 1));
        assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn employer_scope_limits_hiring_trend() {
        let mine = job("Mine", JobStatus::Open, at(2024, 1, 1));
        let theirs = job("Theirs", JobStatus::Open, at(2024, 1, 1));
        let owner = mine.employer_id;
        let apps = vec![
            application(mine.id, ApplicationStatus::Reviewed, at(2024, 2, 1)),
            application(theirs.id, ApplicationStatus::Reviewed, at(2024, 2, 2)),
            application(theirs.id, ApplicationStatus::Rejected, at(2024, 2, 3)),
        ];

        let mut store = MockRecruitmentStore::new();
        let jobs = vec![mine, theirs];
        store.expect_jobs().returning(move || Ok(jobs.clone()));
        store
            .expect_applications()
            .returning(move || Ok(apps.clone()));
        let service = AnalyticsService::new(Arc::new(store));

        let scoped = service
            .hiring_trend(Some(owner), TrendPeriod::SixMonths, at(2024, 3, 1))
            .expect("trend");
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].total, 1);

        let global = service
            .hiring_trend(None, TrendPeriod::SixMonths, at(2024, 3, 1))
            .expect("trend");
        assert_eq!(global[0].total, 3);
    }

    #[test]
    fn demographics_count_each_application() {
        let role = job("Role", JobStatus::Open, at(2024, 1, 1));
        let person = applicant(Some(30), &["Rust"], Some(4));
        let mut first = application(role.id, ApplicationStatus::Pending, at(2024, 1, 2));
        let mut second = application(Uuid::new_v4(), ApplicationStatus::Pending, at(2024, 1, 3));
        first.candidate_id = person.id;
        second.candidate_id = person.id;
        let orphan = application(role.id, ApplicationStatus::Pending, at(2024, 1, 4));

        let mut store = MockRecruitmentStore::new();
        let apps = vec![first, second, orphan];
        store
            .expect_applications()
            .returning(move || Ok(apps.clone()));
        store
            .expect_candidates()
            .returning(move || Ok(vec![person.clone()]));
        store.expect_jobs().never();
        let service = AnalyticsService::new(Arc::new(store));

        let demographics = service.demographics(None).expect("demographics");
        assert_eq!(demographics.total_applicants, 2);
        assert_eq!(demographics.top_skills[0].count, 2);
    }

    #[test]
    fn system_stats_count_everything() {
        use crate::models::interview::{InterviewMode, InterviewRecord};

        let open = job("Open", JobStatus::Open, at(2024, 1, 1));
        let mut sibling = job("Sibling", JobStatus::Closed, at(2024, 1, 2));
        sibling.employer_id = open.employer_id;
        let other = job("Other", JobStatus::OnHold, at(2024, 1, 3));
        let apps = vec![
            application(open.id, ApplicationStatus::Pending, at(2024, 2, 1)),
            application(open.id, ApplicationStatus::Reviewed, at(2024, 2, 2)),
            application(other.id, ApplicationStatus::Pending, at(2024, 2, 3)),
        ];
        let interview = |day: u32, status: InterviewStatus| InterviewRecord {
            id: Uuid::new_v4(),
            application_id: Uuid::new_v4(),
            job_id: open.id,
            candidate_id: Uuid::new_v4(),
            employer_id: open.employer_id,
            date: at(2024, 3, day).date_naive(),
            time: "10:00".into(),
            mode: InterviewMode::Onsite,
            meeting_link: None,
            location: Some("HQ".into()),
            status,
            notes: None,
            created_at: at(2024, 2, 1),
        };
        let interviews = vec![
            interview(9, InterviewStatus::Scheduled),
            interview(10, InterviewStatus::Scheduled),
            interview(11, InterviewStatus::Confirmed),
            interview(20, InterviewStatus::Scheduled),
        ];

        let mut store = MockRecruitmentStore::new();
        let people = vec![applicant(Some(25), &[], None), applicant(Some(40), &[], None)];
        let jobs = vec![open, sibling, other];
        store.expect_candidates().returning(move || Ok(people.clone()));
        store.expect_jobs().returning(move || Ok(jobs.clone()));
        store.expect_applications().returning(move || Ok(apps.clone()));
        store
            .expect_interviews()
            .returning(move || Ok(interviews.clone()));
        let service = AnalyticsService::new(Arc::new(store));

        let stats = service.system_stats(at(2024, 3, 10)).expect("stats");
        assert_eq!(
            stats,
            SystemStats {
                total_users: 4,
                total_candidates: 2,
                total_employers: 2,
                total_jobs: 3,
                active_jobs: 1,
                total_applications: 3,
                pending_applications: 2,
                total_interviews: 4,
                upcoming_interviews: 2,
            }
        );
    }
}
