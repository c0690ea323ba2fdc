use chrono::{DateTime, Utc};

/// Identifier assigned by the store when an expense is inserted
pub type ExpenseId = i64;

/// A single recorded expense
///
/// No invariant ties `amount` to a range or `date` to the creation time.
/// The `id` is assigned by the store and never changes afterwards.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Expense {
    pub id: ExpenseId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

/// Expense data before the store has assigned an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub title: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

impl NewExpense {
    /// Attaches the id assigned by the store
    pub fn with_id(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            amount: self.amount,
            date: self.date,
        }
    }
}

/// Partial update of an expense
///
/// `None` leaves the stored value untouched. `Some` overwrites it, including
/// with an empty string or a zero amount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<DateTime<Utc>>,
}

impl ExpensePatch {
    /// Returns true if the patch would not change any field
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.date.is_none()
    }

    /// Overwrites the fields of `expense` that are present in the patch
    pub fn apply_to(self, expense: &mut Expense) {
        if let Some(title) = self.title {
            expense.title = title;
        }
        if let Some(description) = self.description {
            expense.description = description;
        }
        if let Some(category) = self.category {
            expense.category = category;
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn lunch() -> Expense {
        NewExpense {
            title: "Lunch".to_string(),
            description: "Noodles".to_string(),
            category: "Food".to_string(),
            amount: 10.0,
            date: Utc.with_ymd_and_hms(2025, 1, 17, 12, 30, 0).unwrap(),
        }
        .with_id(1)
    }

    #[test]
    fn with_id_keeps_fields() {
        let expense = lunch();

        assert_eq!(expense.id, 1);
        assert_eq!(expense.title, "Lunch");
        assert_eq!(expense.amount, 10.0);
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut expense = lunch();
        let patch = ExpensePatch {
            amount: Some(15.0),
            ..Default::default()
        };

        patch.apply_to(&mut expense);

        assert_eq!(expense.title, "Lunch");
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount, 15.0);
    }

    #[test]
    fn patch_with_zero_values_still_overwrites() {
        let mut expense = lunch();
        let patch = ExpensePatch {
            title: Some(String::new()),
            amount: Some(0.0),
            ..Default::default()
        };

        patch.apply_to(&mut expense);

        assert_eq!(expense.title, "");
        assert_eq!(expense.amount, 0.0);
        assert_eq!(expense.description, "Noodles");
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut expense = lunch();
        let patch = ExpensePatch::default();
        assert!(patch.is_empty());

        patch.apply_to(&mut expense);

        assert_eq!(expense, lunch());
    }

    #[test]
    fn patch_with_date_is_not_empty() {
        let patch = ExpensePatch {
            date: Some(Utc::now()),
            ..Default::default()
        };

        assert!(!patch.is_empty());
    }
}
