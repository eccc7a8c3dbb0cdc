//! Interactive course requirements questionnaire.
//!
//! Five questions, asked in order, localized for Indonesian and English.
//! Each question re-prompts until a valid answer is given; the focus
//! question additionally validates its enumerated options. Generic over the
//! reader/writer so tests can drive it with buffers.

use std::io::{BufRead, Write};

use coursegen_shared::{CoursegenError, Requirements, Result};

/// Total number of questions, used in the "[i/N]" prefix.
const QUESTION_COUNT: usize = 5;

/// Synthesized answers used when the questionnaire is skipped.
pub fn default_requirements(topic: &str) -> Requirements {
    Requirements {
        learning_goals: format!("Comprehensive understanding of {topic}"),
        time_dedication: "5 hours per week".into(),
        prior_knowledge: "Basic knowledge".into(),
        learning_focus: "3".into(),
        expected_outcomes: format!("Master {topic} concepts and applications"),
    }
}

/// Run the interactive questionnaire.
pub fn gather_requirements<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    topic: &str,
    language: &str,
) -> Result<Requirements> {
    let id = language == "id";

    let header = if id {
        format!("Beberapa pertanyaan untuk menyesuaikan kursus '{topic}':")
    } else {
        format!("A few questions to tailor the course on '{topic}':")
    };
    write_line(output, &format!("\n{header}\n"))?;

    let learning_goals = ask(
        input,
        output,
        1,
        &if id {
            format!("Apa yang ingin Anda capai dengan mempelajari {topic}?")
        } else {
            format!("What do you want to achieve by learning {topic}?")
        },
        None,
        id,
    )?;

    let time_dedication = ask(
        input,
        output,
        2,
        if id {
            "Berapa banyak waktu yang bisa Anda dedikasikan per minggu?"
        } else {
            "How much time can you dedicate per week?"
        },
        None,
        id,
    )?;

    let prior_knowledge = ask(
        input,
        output,
        3,
        &if id {
            format!("Bagaimana tingkat pengetahuan Anda saat ini tentang {topic}?")
        } else {
            format!("What is your current knowledge of {topic}?")
        },
        None,
        id,
    )?;

    let focus_question = if id {
        "Apa fokus pembelajaran yang Anda inginkan?\n\
           1. Teori mendalam\n\
           2. Praktik dan implementasi\n\
           3. Kombinasi teori dan praktik\n\
           4. Studi kasus dan aplikasi real-world"
    } else {
        "What learning focus do you want?\n\
           1. In-depth theory\n\
           2. Practice and implementation\n\
           3. Combination of theory and practice\n\
           4. Case studies and real-world applications"
    };
    let learning_focus = ask(
        input,
        output,
        4,
        focus_question,
        Some(&["1", "2", "3", "4"]),
        id,
    )?;

    let expected_outcomes = ask(
        input,
        output,
        5,
        if id {
            "Apa yang Anda harapkan bisa dilakukan setelah menyelesaikan kursus?"
        } else {
            "What do you expect to be able to do after finishing?"
        },
        None,
        id,
    )?;

    Ok(Requirements {
        learning_goals,
        time_dedication,
        prior_knowledge,
        learning_focus,
        expected_outcomes,
    })
}

/// Ask one question, re-prompting until the answer is non-empty and, when
/// options are given, one of them.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    number: usize,
    question: &str,
    options: Option<&[&str]>,
    id: bool,
) -> Result<String> {
    loop {
        write_line(output, &format!("[{number}/{QUESTION_COUNT}] {question}"))?;
        write_str(output, "> ")?;
        output.flush().map_err(stream_error)?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(stream_error)?;
        if read == 0 {
            return Err(CoursegenError::validation(
                "input stream closed before the questionnaire finished",
            ));
        }

        let answer = line.trim();
        if answer.is_empty() {
            let msg = if id {
                "Jawaban tidak boleh kosong."
            } else {
                "The answer must not be empty."
            };
            write_line(output, msg)?;
            continue;
        }
        if let Some(options) = options {
            if !options.contains(&answer) {
                let msg = if id {
                    format!("Pilih salah satu dari: {}", options.join(", "))
                } else {
                    format!("Choose one of: {}", options.join(", "))
                };
                write_line(output, &msg)?;
                continue;
            }
        }
        return Ok(answer.to_string());
    }
}

fn write_line<W: Write>(output: &mut W, text: &str) -> Result<()> {
    writeln!(output, "{text}").map_err(stream_error)
}

fn write_str<W: Write>(output: &mut W, text: &str) -> Result<()> {
    write!(output, "{text}").map_err(stream_error)
}

fn stream_error(e: std::io::Error) -> CoursegenError {
    CoursegenError::io("<console>", e)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(answers: &str) -> Result<Requirements> {
        let mut input = answers.as_bytes();
        let mut output = Vec::new();
        gather_requirements(&mut input, &mut output, "Rust", "en")
    }

    #[test]
    fn collects_all_five_answers() {
        let requirements = run("Build tools\n5 hours\nSome C\n2\nShip a CLI\n").unwrap();
        assert_eq!(requirements.learning_goals, "Build tools");
        assert_eq!(requirements.time_dedication, "5 hours");
        assert_eq!(requirements.prior_knowledge, "Some C");
        assert_eq!(requirements.learning_focus, "2");
        assert_eq!(requirements.expected_outcomes, "Ship a CLI");
    }

    #[test]
    fn reprompts_on_empty_answer() {
        let requirements = run("\nGoals\nTime\nKnowledge\n1\nOutcome\n").unwrap();
        assert_eq!(requirements.learning_goals, "Goals");
    }

    #[test]
    fn reprompts_on_invalid_focus_option() {
        let requirements = run("Goals\nTime\nKnowledge\n9\nbanana\n4\nOutcome\n").unwrap();
        assert_eq!(requirements.learning_focus, "4");
        assert_eq!(requirements.expected_outcomes, "Outcome");
    }

    #[test]
    fn closed_input_is_an_error() {
        let err = run("Goals\n").unwrap_err();
        assert!(err.to_string().contains("input stream closed"));
    }

    #[test]
    fn questions_are_numbered() {
        let mut input = "a\nb\nc\n1\ne\n".as_bytes();
        let mut output = Vec::new();
        gather_requirements(&mut input, &mut output, "Rust", "en").unwrap();
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("[1/5]"));
        assert!(transcript.contains("[5/5]"));
    }

    #[test]
    fn defaults_mention_topic() {
        let requirements = default_requirements("Linear Algebra");
        assert_eq!(
            requirements.learning_goals,
            "Comprehensive understanding of Linear Algebra"
        );
        assert_eq!(requirements.learning_focus, "3");
    }
}
