use anyhow::Result;
use labbook::{LabId, LabRunner, LabbookConfig};
use tempfile::TempDir;

fn transcript(id: LabId) -> Result<String> {
    let runner = LabRunner::new(LabbookConfig::default());
    Ok(runner.transcript(id, "")?)
}

#[test]
fn test_arrays_transcript() -> Result<()> {
    let text = transcript(LabId::Arrays)?;
    let expected = "Array elements: 1 2 3 4 5 \n\
                    1 2 3 4 5 \n\
                    2D Array elements:\n\
                    1 2 3 4 5 \n\
                    6 7 8 9 10 \n\
                    11 12 13 14 15 \n\
                    16 17 18 19 20 \n\
                    21 22 23 24 25 \n\
                    3D Array elements:\n\
                    1 2 3 \n\
                    4 5 6 \n\
                    7 8 9 \n\
                    \n\
                    10 11 12 \n\
                    13 14 15 \n\
                    16 17 18 \n\
                    \n\
                    19 20 21 \n\
                    22 23 24 \n\
                    25 26 27 \n\
                    \n";
    assert_eq!(text, expected);
    Ok(())
}

#[test]
fn test_vectors_transcript() -> Result<()> {
    let text = transcript(LabId::Vectors)?;
    assert_eq!(
        text,
        "Vector elements: 1 2 3 4 5 \n\
         1 2 3 4 5 \n\
         After adding an element: 1 2 3 4 5 6 \n\
         After removing the last element: 1 2 3 4 5 \n"
    );
    Ok(())
}

#[test]
fn test_bitwise_transcript() -> Result<()> {
    let text = transcript(LabId::Bitwise)?;
    assert_eq!(
        text,
        "a & b: 1\na | b: 7\na ^ b: 6\n~a: -6\na << 1: 10\nb >> 1: 1\n"
    );
    Ok(())
}

#[test]
fn test_pointers_values_and_sections() -> Result<()> {
    let text = transcript(LabId::Pointers)?;
    let lines: Vec<&str> = text.lines().collect();

    // 位址每次執行都不同，只比對數值與標題
    assert_eq!(lines[0], "1) Basic Pointer");
    assert_eq!(lines[1], "number value      : 10");
    assert!(lines[2].starts_with("number address    : 0x"));
    assert!(lines[3].starts_with("pNumber (address) : 0x"));
    assert_eq!(
        lines[2].trim_start_matches("number address    : "),
        lines[3].trim_start_matches("pNumber (address) : ")
    );
    assert_eq!(lines[4], "*pNumber (value)  : 10");
    assert_eq!(lines[5], "After *pNumber = 25, number = 25");

    for (i, value) in [2, 4, 6, 8, 10].iter().enumerate() {
        let prefix = format!("arr[{}] = {} (address: 0x", i, value);
        assert!(text.contains(&prefix), "missing {}", prefix);
    }

    assert!(text.contains("Before updateValue: 100\n"));
    assert!(text.contains("After updateValue : 500\n"));
    assert!(text.contains("sumArray(arr, 5)  : 30\n"));
    assert!(text.contains("x                 : 7\n"));
    assert!(text.contains("*pX               : 7\n"));
    assert!(text.contains("**ppX             : 7\n"));
    assert!(text.contains("dynamicNumber value: 42\n"));
    assert!(text.contains("updated dynamic value: 99\n"));
    assert!(text.contains("dynamic array values: 10 20 30 40 \n"));
    assert!(text.ends_with("\nAll pointer examples completed.\n"));
    Ok(())
}

#[test]
fn test_file_handling_writes_and_reads_back() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("filename.txt");
    let config = LabbookConfig::default().with_file_path(path.to_string_lossy());

    let runner = LabRunner::new(config);
    let text = runner.transcript(LabId::FileHandling, "")?;

    assert_eq!(text, "Files can be tricky, but it is fun enough!\n");
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "Files can be tricky, but it is fun enough!"
    );
    Ok(())
}

#[test]
fn test_file_handling_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_path = temp_dir.path().join("lab.txt");
    let config_path = temp_dir.path().join("labbook.toml");
    let normalized = data_path.to_string_lossy().replace('\\', "/");
    std::fs::write(&config_path, format!("[files]\npath = \"{}\"\n", normalized))?;

    let config = LabbookConfig::discover(Some(config_path.as_path()))?;
    let runner = LabRunner::new(config);
    runner.transcript(LabId::FileHandling, "")?;

    assert!(data_path.exists());
    Ok(())
}
