use super::super::domain::Candidate;
use std::io::{BufReader, Read};

pub(crate) fn parse_json<R: Read>(reader: R) -> Result<Vec<Candidate>, serde_json::Error> {
    serde_json::from_reader(BufReader::new(reader))
}

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<Candidate>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<Candidate>().collect()
}
