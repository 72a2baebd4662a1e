// External Crate Imports
use nom::{
    IResult,
    bytes::complete::take_till,
    character::complete::{char, satisfy},
    combinator::all_consuming,
    multi::separated_list1,
};

// Public API ==========================================================================================================

/// Residue Code = uppercase | lowercase ;
pub fn residue_code(i: &str) -> IResult<&str, char> {
    satisfy(|c| c.is_ascii_alphabetic())(i)
}

/// Field = { any character - tab } ;
pub fn field(i: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == '\t')(i)
}

/// Record = Field , { tab , Field } ;
pub fn record(i: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char('\t'), field)(i)
}

/// Parses a whole field as a single residue code, rejecting any trailing characters
pub fn standalone_residue_code(i: &str) -> Option<char> {
    all_consuming(residue_code)(i).ok().map(|(_, code)| code)
}

// Module Tests ========================================================================================================
