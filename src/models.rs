//! Frontend Models
//!
//! Data structures matching backend survey entities.

use serde::{Deserialize, Serialize};

/// Survey data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub id: u32,
    pub name: String,
    pub created_at: String,
    pub questions: Vec<Question>,
}

/// Question data structure (matches backend)
///
/// `choice` is client-side only: the choice id selected for the response
/// currently being filled in. Backend payloads omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub choice: Option<u32>,
}

/// Choice data structure (matches backend)
///
/// `selected` is the server-side tally; the client only displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: u32,
    pub text: String,
    pub selected: u32,
}

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

/// Login/register form payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Payload returned by the auth endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

// ========================
// Survey Builder Payloads
// ========================

/// Draft survey for submission; the backend assigns ids
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewSurvey {
    pub name: String,
    pub questions: Vec<NewQuestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewQuestion {
    pub text: String,
    pub choices: Vec<NewChoice>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewChoice {
    pub text: String,
}

impl Survey {
    /// Reset the response in progress: no question has a selected choice.
    pub fn clear_choices(&mut self) {
        for question in &mut self.questions {
            question.choice = None;
        }
    }

    /// Record the selected choice for one question. First id match wins;
    /// an unknown question id leaves the survey untouched.
    pub fn set_choice(&mut self, question_id: u32, choice_id: u32) {
        if let Some(question) = self.questions.iter_mut().find(|q| q.id == question_id) {
            question.choice = Some(choice_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_survey() -> Survey {
        Survey {
            id: 1,
            name: "Dogs".to_string(),
            created_at: "2017-12-01 00:00:00".to_string(),
            questions: vec![
                Question {
                    id: 1,
                    text: "What is your favorite dog?".to_string(),
                    choices: vec![
                        Choice { id: 1, text: "Beagle".to_string(), selected: 0 },
                        Choice { id: 2, text: "Labrador".to_string(), selected: 0 },
                    ],
                    choice: Some(2),
                },
                Question {
                    id: 2,
                    text: "What is your second favorite dog?".to_string(),
                    choices: vec![
                        Choice { id: 5, text: "Beagle".to_string(), selected: 0 },
                        Choice { id: 6, text: "Labrador".to_string(), selected: 0 },
                    ],
                    choice: None,
                },
            ],
        }
    }

    #[test]
    fn test_clear_choices() {
        let mut survey = make_survey();
        survey.clear_choices();
        assert!(survey.questions.iter().all(|q| q.choice.is_none()));
    }

    #[test]
    fn test_set_choice_updates_only_matching_question() {
        let mut survey = make_survey();
        survey.clear_choices();
        survey.set_choice(2, 6);
        assert_eq!(survey.questions[0].choice, None);
        assert_eq!(survey.questions[1].choice, Some(6));
    }

    #[test]
    fn test_set_choice_unknown_question_is_noop() {
        let mut survey = make_survey();
        survey.clear_choices();
        survey.set_choice(99, 1);
        assert!(survey.questions.iter().all(|q| q.choice.is_none()));
    }

    #[test]
    fn test_question_payload_without_choice_field() {
        let question: Question = serde_json::from_str(
            r#"{"id":1,"text":"What is your favorite dog?","choices":[]}"#,
        )
        .unwrap();
        assert_eq!(question.choice, None);
    }
}
