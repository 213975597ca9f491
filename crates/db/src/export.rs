//! Spreadsheet-friendly CSV exports of the account collections.
//!
//! Output is UTF-8 with a leading byte-order mark so spreadsheet tools pick the right
//! encoding for Turkish names. Every field is quoted.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};
use eyre::{Result, WrapErr};
use kasif_core::models::{
    instructor::Instructor,
    student::{Student, StudentStatus},
};

pub const BOM: &str = "\u{FEFF}";

pub const STUDENTS_FILE_NAME: &str = "kasif_listesi.csv";
pub const INSTRUCTORS_FILE_NAME: &str = "kasif_abileri_listesi.csv";

const STUDENT_HEADERS: [&str; 9] = [
    "ID",
    "Ad Soyad",
    "Kullanıcı Adı",
    "Grup Kodu",
    "GP",
    "NP",
    "Durum",
    "Veli Tel",
    "Kaşif Tel",
];

const INSTRUCTOR_HEADERS: [&str; 4] = ["ID", "Ad Soyad", "Kullanıcı Adı", "Sınıf Kodları"];

fn status_label(status: StudentStatus) -> &'static str {
    match status {
        StudentStatus::Pending => "pending",
        StudentStatus::Approved => "approved",
    }
}

fn writer<W: Write>(mut out: W) -> Result<csv::Writer<W>> {
    out.write_all(BOM.as_bytes())?;
    Ok(WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(out))
}

pub fn write_students<W: Write>(students: &[Student], out: W) -> Result<()> {
    let mut csv = writer(out)?;
    csv.write_record(STUDENT_HEADERS)?;
    for s in students {
        csv.write_record([
            s.id.to_string(),
            s.name.clone(),
            s.username.clone(),
            s.class_code.clone(),
            s.points.to_string(),
            s.namaz_points.to_string(),
            status_label(s.status).to_string(),
            s.parent_phone.clone().unwrap_or_default(),
            s.student_phone.clone().unwrap_or_default(),
        ])
        .wrap_err_with(|| format!("Failed to export student {}", s.id))?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_instructors<W: Write>(instructors: &[Instructor], out: W) -> Result<()> {
    let mut csv = writer(out)?;
    csv.write_record(INSTRUCTOR_HEADERS)?;
    for i in instructors {
        csv.write_record([
            i.id.to_string(),
            i.name.clone(),
            i.username.clone(),
            i.class_codes.join(" - "),
        ])
        .wrap_err_with(|| format!("Failed to export instructor {}", i.id))?;
    }
    csv.flush()?;
    Ok(())
}

pub fn students_csv(students: &[Student]) -> Result<String> {
    let mut buf = Vec::new();
    write_students(students, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

pub fn instructors_csv(instructors: &[Instructor]) -> Result<String> {
    let mut buf = Vec::new();
    write_instructors(instructors, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kasif_core::seed;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_students_csv_layout() {
        let mut students = seed::students("hash");
        students[0].parent_phone = Some("0555 111 22 33".to_string());

        let csv = students_csv(&students).unwrap();
        assert!(csv.starts_with(BOM));

        let lines: Vec<&str> = csv.trim_start_matches(BOM).lines().collect();
        assert_eq!(
            lines[0],
            r#""ID","Ad Soyad","Kullanıcı Adı","Grup Kodu","GP","NP","Durum","Veli Tel","Kaşif Tel""#
        );
        assert_eq!(
            lines[1],
            r#""101","Örnek Öğrenci","ogrenci","1453","1000","50","approved","0555 111 22 33","""#
        );
    }

    #[test]
    fn test_instructors_csv_joins_codes_and_omits_hash() {
        let mut instructors = seed::instructors("secret-hash");
        instructors[0].class_codes.push("482913".to_string());

        let csv = instructors_csv(&instructors).unwrap();
        assert!(!csv.contains("secret-hash"));
        assert!(csv.contains(r#""1453 - 482913""#));
    }

    #[test]
    fn test_embedded_quotes_are_escaped() {
        let mut students = seed::students("hash");
        students[0].name = r#"Ali "Kaşif" Can"#.to_string();

        let csv = students_csv(&students).unwrap();
        assert!(csv.contains(r#""Ali ""Kaşif"" Can""#));
    }
}
