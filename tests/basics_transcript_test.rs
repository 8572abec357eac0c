use anyhow::Result;
use labbook::{LabError, LabId, LabRunner, LabbookConfig};

fn transcript(id: LabId, input: &str) -> Result<String> {
    let runner = LabRunner::new(LabbookConfig::default());
    Ok(runner.transcript(id, input)?)
}

#[test]
fn test_conditions_subtraction_and_grade_b() -> Result<()> {
    let text = transcript(LabId::Conditions, "2\n85\n")?;
    assert_eq!(
        text,
        "Enter choice (1-3): You selected subtraction\n\
         Enter marks (0-100): Grade B\n"
    );
    Ok(())
}

#[test]
fn test_conditions_grade_ladder() -> Result<()> {
    for (marks, grade) in [("90", "A"), ("75", "B"), ("60", "C"), ("59", "D")] {
        let text = transcript(LabId::Conditions, &format!("1 {}", marks))?;
        assert!(text.starts_with("Enter choice (1-3): You selected addition\n"));
        assert!(text.ends_with(&format!("Grade {}\n", grade)), "marks {}", marks);
    }

    let text = transcript(LabId::Conditions, "3 100")?;
    assert!(text.contains("You selected multiplication\n"));
    Ok(())
}

#[test]
fn test_conditions_invalid_choice_stops_before_marks() -> Result<()> {
    let text = transcript(LabId::Conditions, "7")?;
    assert_eq!(text, "Enter choice (1-3): Invalid choice\n");
    Ok(())
}

#[test]
fn test_conditions_rejects_non_numeric_input() {
    let runner = LabRunner::new(LabbookConfig::default());
    let err = runner.transcript(LabId::Conditions, "two").unwrap_err();
    assert!(matches!(err, LabError::InvalidInputError { ref found, .. } if found == "two"));
}

#[test]
fn test_functions_transcript() -> Result<()> {
    let text = transcript(LabId::Functions, "1 2 4")?;
    assert_eq!(
        text,
        "Enter three integers: add(x, y): 3\n\
         average(x, y, z): 2.33333\n\
         isEven(z): true\n"
    );

    let text = transcript(LabId::Functions, "10\n20\n-3\n")?;
    assert!(text.contains("add(x, y): 30\n"));
    assert!(text.contains("average(x, y, z): 9\n"));
    assert!(text.ends_with("isEven(z): false\n"));
    Ok(())
}

#[test]
fn test_loops_transcript() -> Result<()> {
    let text = transcript(LabId::Loops, "5")?;
    assert_eq!(
        text,
        "Enter n: For loop: 1 2 3 4 5 \n\
         While loop (sum 1..n): 15\n\
         Do-while loop (countdown): 5 4 3 2 1 \n"
    );
    Ok(())
}

#[test]
fn test_loops_non_positive_n() -> Result<()> {
    let text = transcript(LabId::Loops, "0")?;
    assert_eq!(
        text,
        "Enter n: For loop: \n\
         While loop (sum 1..n): 0\n\
         Do-while loop (countdown): none\n"
    );

    let text = transcript(LabId::Loops, "-4")?;
    assert!(text.ends_with("Do-while loop (countdown): none\n"));
    Ok(())
}

#[test]
fn test_operators_transcript() -> Result<()> {
    let text = transcript(LabId::Operators, "")?;
    let expected = "\
Value of b is: 10
The sum of a and b is: 10
The difference of a and b is: 10
The product of a and b is: 0
The quotient of a and b is: undefined (division by zero)
The modulus/reminder of a and b is: undefined (division by zero)
Value of a is: 10
Value of b is: 0
Is a equal to b? 0
Is a not equal to b? 1
Is a greater than b? 1
Is a less than b? 0
Is a greater than or equal to b? 1
Is a less than or equal to b? 0
Logical AND result: 0
Logical OR result: 1
Logical NOT result: 0
Value of a after increment: 11
Value of b after increment: 1
Value of a after decrement: 10
Value of b after decrement: 0
Value of x: 9
Value of y: 10
";
    assert_eq!(text, expected);
    Ok(())
}

#[test]
fn test_scripted_input_from_config() -> Result<()> {
    let config = LabbookConfig::from_toml("[inputs]\nloops = \"3\"\n")?;
    let runner = LabRunner::new(config);
    let report = runner.capture(LabId::Loops, runner.input_for(LabId::Loops, None))?;
    let text = report.transcript.unwrap_or_default();
    assert!(text.contains("While loop (sum 1..n): 6\n"));
    Ok(())
}
