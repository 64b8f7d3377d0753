//! XML codec for the creators payload and the creators export.
//!
//! # Responsibility
//! - Read `<Creators>` import documents into `ImportCreatorDto`s.
//! - Write the creators export document.
//!
//! # Invariants
//! - Unknown elements are skipped; a wrong root element is rejected.
//! - Numeric fields that do not parse reject the whole document.
//! - Exports carry no namespace declarations.

use crate::dto::export::ExportCreatorDto;
use crate::dto::import::{ImportBoardgameDto, ImportCreatorDto};
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::reader::Reader;
use quick_xml::Writer;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const ROOT: &str = "Creators";
const INDENT: usize = 2;

/// Failure while reading or writing an XML document.
#[derive(Debug)]
pub enum XmlError {
    Syntax(quick_xml::Error),
    Io(std::io::Error),
    /// Well-formed XML whose content does not fit the expected shape.
    Malformed(String),
}

impl Display for XmlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(err) => write!(f, "XML parse error: {err}"),
            Self::Io(err) => write!(f, "XML write error: {err}"),
            Self::Malformed(message) => write!(f, "malformed creators XML: {message}"),
        }
    }
}

impl Error for XmlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Syntax(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Malformed(_) => None,
        }
    }
}

impl From<quick_xml::Error> for XmlError {
    fn from(value: quick_xml::Error) -> Self {
        Self::Syntax(value)
    }
}

impl From<std::io::Error> for XmlError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Parses a `<Creators>` document.
pub fn read_creators(xml: &str) -> Result<Vec<ImportCreatorDto>, XmlError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut seen_root = false;
    let mut creators = Vec::new();
    let mut creator: Option<ImportCreatorDto> = None;
    let mut boardgame: Option<ImportBoardgameDto> = None;
    // Content of the innermost open element; may arrive in several events.
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if path.is_empty() {
                    check_root(&name)?;
                    seen_root = true;
                }
                path.push(name);
                text.clear();
                open_element(&path, &mut creator, &mut boardgame);
            }
            Event::Empty(ref e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if path.is_empty() {
                    check_root(&name)?;
                    seen_root = true;
                }
                path.push(name);
                open_element(&path, &mut creator, &mut boardgame);
                assign_text(&path, "", &mut creator, &mut boardgame)?;
                close_element(&path, &mut creators, &mut creator, &mut boardgame);
                path.pop();
            }
            Event::Text(ref e) => text.push_str(&e.unescape()?),
            Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e.into_inner())),
            Event::End(_) => {
                assign_text(&path, &text, &mut creator, &mut boardgame)?;
                text.clear();
                close_element(&path, &mut creators, &mut creator, &mut boardgame);
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(XmlError::Malformed(format!("missing root element `{ROOT}`")));
    }
    if let Some(open) = path.last() {
        return Err(XmlError::Malformed(format!(
            "document ends inside element `{open}`"
        )));
    }

    Ok(creators)
}

fn check_root(name: &str) -> Result<(), XmlError> {
    if name == ROOT {
        Ok(())
    } else {
        Err(XmlError::Malformed(format!(
            "expected root element `{ROOT}`, found `{name}`"
        )))
    }
}

fn is_creator(path: &[String]) -> bool {
    matches!(path, [_, creator] if creator == "Creator")
}

fn is_boardgame(path: &[String]) -> bool {
    matches!(path, [_, creator, list, game]
        if creator == "Creator" && list == "Boardgames" && game == "Boardgame")
}

fn open_element(
    path: &[String],
    creator: &mut Option<ImportCreatorDto>,
    boardgame: &mut Option<ImportBoardgameDto>,
) {
    if is_creator(path) {
        *creator = Some(ImportCreatorDto::default());
    } else if is_boardgame(path) && creator.is_some() {
        *boardgame = Some(ImportBoardgameDto::default());
    }
}

fn close_element(
    path: &[String],
    creators: &mut Vec<ImportCreatorDto>,
    creator: &mut Option<ImportCreatorDto>,
    boardgame: &mut Option<ImportBoardgameDto>,
) {
    if is_creator(path) {
        creators.extend(creator.take());
    } else if is_boardgame(path) {
        if let (Some(owner), Some(game)) = (creator.as_mut(), boardgame.take()) {
            owner.boardgames.push(game);
        }
    }
}

fn assign_text(
    path: &[String],
    text: &str,
    creator: &mut Option<ImportCreatorDto>,
    boardgame: &mut Option<ImportBoardgameDto>,
) -> Result<(), XmlError> {
    let Some((field, parent)) = path.split_last() else {
        return Ok(());
    };

    if is_creator(parent) {
        if let Some(creator) = creator.as_mut() {
            match field.as_str() {
                "FirstName" => creator.first_name = Some(text.to_string()),
                "LastName" => creator.last_name = Some(text.to_string()),
                _ => {}
            }
        }
    } else if is_boardgame(parent) {
        if let Some(game) = boardgame.as_mut() {
            match field.as_str() {
                "Name" => game.name = Some(text.to_string()),
                "Rating" => game.rating = Some(parse_number("Rating", text)?),
                "YearPublished" => game.year_published = Some(parse_number("YearPublished", text)?),
                "CategoryType" => game.category_type = Some(parse_number("CategoryType", text)?),
                "Mechanics" => game.mechanics = Some(text.to_string()),
                _ => {}
            }
        }
    }
    Ok(())
}

fn parse_number<T: FromStr>(field: &str, text: &str) -> Result<T, XmlError> {
    text.trim()
        .parse()
        .map_err(|_| XmlError::Malformed(format!("invalid {field} value `{text}`")))
}

/// Writes the creators export document, trimmed of trailing whitespace.
pub fn write_creators(creators: &[ExportCreatorDto]) -> Result<String, XmlError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-16"), None)))?;

    if creators.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(ROOT)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(ROOT)))?;
        for creator in creators {
            let count = creator.boardgames_count.to_string();
            let mut start = BytesStart::new("Creator");
            start.push_attribute(("BoardgamesCount", count.as_str()));
            writer.write_event(Event::Start(start))?;
            write_text_element(&mut writer, "CreatorName", &creator.creator_name)?;

            writer.write_event(Event::Start(BytesStart::new("Boardgames")))?;
            for game in &creator.boardgames {
                writer.write_event(Event::Start(BytesStart::new("Boardgame")))?;
                write_text_element(&mut writer, "BoardgameName", &game.name)?;
                write_text_element(
                    &mut writer,
                    "BoardgameYearPublished",
                    &game.year_published.to_string(),
                )?;
                writer.write_event(Event::End(BytesEnd::new("Boardgame")))?;
            }
            writer.write_event(Event::End(BytesEnd::new("Boardgames")))?;
            writer.write_event(Event::End(BytesEnd::new("Creator")))?;
        }
        writer.write_event(Event::End(BytesEnd::new(ROOT)))?;
    }

    let bytes = writer.into_inner();
    Ok(String::from_utf8_lossy(&bytes).trim_end().to_string())
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    tag: &str,
    text: &str,
) -> Result<(), XmlError> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    // Quotes stay literal in text content.
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
