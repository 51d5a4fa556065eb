use clap::Parser;
use student_roster::config::Command;
use student_roster::utils::{logger, validation::Validate};
use student_roster::{CliConfig, FileStudentRepository, Student, StudentRepository, University};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }

    let repository = FileStudentRepository::new(config.file.clone())?;

    // Rebuild the in-memory roster from the file; the repository already
    // skips malformed lines, and duplicate identities are dropped here.
    let mut university = University::new();
    for student in repository.load_students()? {
        if let Err(e) = university.add_student(student) {
            tracing::warn!("Skipped duplicate entry from roster file: {}", e);
        }
    }

    match config.command {
        Command::Add {
            first_name,
            last_name,
            age,
            average_grade,
        } => {
            let student = Student::new(first_name, last_name, age, average_grade)?;
            let name = format!("{} {}", student.first_name(), student.last_name());
            university.add_student(student)?;
            repository.save_students(university.students())?;
            tracing::info!("Added {} to {}", name, config.file);
            println!("Added {name}. Roster now has {} students.", university.len());
        }
        Command::Remove {
            first_name,
            last_name,
        } => match university.find_student(&first_name, &last_name)?.cloned() {
            Some(student) => {
                university.remove_student(&student);
                repository.save_students(university.students())?;
                println!("Removed {} {}.", student.first_name(), student.last_name());
            }
            None => println!("No student named {first_name} {last_name}."),
        },
        Command::Find {
            first_name,
            last_name,
        } => match university.find_student(&first_name, &last_name)? {
            Some(student) => println!(
                "{} {}, Age: {}, Grade: {}",
                student.first_name(),
                student.last_name(),
                student.age(),
                student.average_grade()
            ),
            None => println!("No student named {first_name} {last_name}."),
        },
        Command::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(university.students())?);
            } else if university.is_empty() {
                println!("Roster is empty.");
            } else {
                for student in university.students() {
                    println!(
                        "{} {}, Age: {}, Grade: {}",
                        student.first_name(),
                        student.last_name(),
                        student.age(),
                        student.average_grade()
                    );
                }
            }
        }
    }

    Ok(())
}
