use common::model::student::StudentRecord;
use common::responses::StudentStats;
use std::collections::BTreeMap;

/// Course bucket for students with no course set.
pub const UNSET_COURSE: &str = "Other";

pub fn compute_stats(records: &[StudentRecord]) -> StudentStats {
    let ages: Vec<f64> = records
        .iter()
        .filter_map(|s| s.age.years())
        .filter(|years| *years > 0.0)
        .collect();

    let average_age = if ages.is_empty() {
        None
    } else {
        let mean = ages.iter().sum::<f64>() / ages.len() as f64;
        Some(mean.round() as u64)
    };

    let mut counts_by_course = BTreeMap::new();
    for student in records {
        let course = if student.course.is_empty() {
            UNSET_COURSE
        } else {
            student.course.as_str()
        };
        *counts_by_course.entry(course.to_string()).or_insert(0) += 1;
    }

    StudentStats {
        total: records.len(),
        average_age,
        active_count: records.iter().filter(|s| s.is_active()).count(),
        counts_by_course,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::model::age::Age;

    fn rec(age: &str, course: &str, status: &str) -> StudentRecord {
        let now = Utc::now();
        StudentRecord {
            id: uuid::Uuid::new_v4().to_string(),
            roll_number: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            age: Age::from(age),
            course: course.to_string(),
            address: String::new(),
            admission_date: String::new(),
            gender: "Other".to_string(),
            status: status.to_string(),
            avatar_url: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn average_skips_blank_and_non_positive_ages() {
        let records = vec![
            rec("20", "Math", "Active"),
            rec("", "Math", "Active"),
            rec("-1", "Math", "Active"),
            rec("30", "Math", "Active"),
        ];
        assert_eq!(compute_stats(&records).average_age, Some(25));
    }

    #[test]
    fn average_is_rounded() {
        let records = vec![rec("20", "", ""), rec("21", "", "")];
        assert_eq!(compute_stats(&records).average_age, Some(21));
    }

    #[test]
    fn no_valid_ages_is_unavailable() {
        let records = vec![rec("", "Math", "Active"), rec("abc", "Math", "Active"), rec("0", "", "")];
        assert_eq!(compute_stats(&records).average_age, None);
        assert_eq!(compute_stats(&[]).average_age, None);
    }

    #[test]
    fn active_count_is_exact_match() {
        let records = vec![
            rec("", "", "Active"),
            rec("", "", "active"),
            rec("", "", "Inactive"),
            rec("", "", "Active"),
        ];
        let stats = compute_stats(&records);
        assert_eq!(stats.active_count, 2);
        assert_eq!(stats.total, 4);
    }

    #[test]
    fn courses_grouped_alphabetically_with_blank_as_other() {
        let records = vec![
            rec("", "Physics", ""),
            rec("", "", ""),
            rec("", "Biology", ""),
            rec("", "Physics", ""),
        ];
        let stats = compute_stats(&records);
        let counts: Vec<_> = stats
            .counts_by_course
            .iter()
            .map(|(course, n)| (course.as_str(), *n))
            .collect();
        assert_eq!(counts, [("Biology", 1), ("Other", 1), ("Physics", 2)]);
    }
}
