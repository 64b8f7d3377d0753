use boardgames_core::db::open_db_in_memory;
use boardgames_core::{
    BoardgameRepository, CategoryType, CreatorRepository, ImportError, ImportService, SqliteStore,
};

const CREATORS_XML: &str = r#"<?xml version='1.0' encoding='UTF-8'?>
<Creators>
  <Creator>
    <FirstName>Debra</FirstName>
    <LastName>Edwards</LastName>
    <Boardgames>
      <Boardgame>
        <Name>4 Gods</Name>
        <Rating>7.28</Rating>
        <YearPublished>2017</YearPublished>
        <CategoryType>4</CategoryType>
        <Mechanics>Area Majority / Influence, Set Collection</Mechanics>
      </Boardgame>
      <Boardgame>
        <Name>7 Steps Forward</Name>
        <Rating>7.5</Rating>
        <YearPublished>2019</YearPublished>
        <CategoryType>3</CategoryType>
        <Mechanics>Dice Rolling</Mechanics>
      </Boardgame>
      <Boardgame>
        <Name>Castles of Burgundy</Name>
        <Rating>8.1</Rating>
        <YearPublished>2020</YearPublished>
        <CategoryType>4</CategoryType>
        <Mechanics>Dice Rolling, Tile Placement</Mechanics>
      </Boardgame>
    </Boardgames>
  </Creator>
  <Creator>
    <FirstName>T</FirstName>
    <LastName>Tooshort</LastName>
    <Boardgames>
      <Boardgame>
        <Name>Never Persisted</Name>
        <Rating>5</Rating>
        <YearPublished>2020</YearPublished>
        <CategoryType>1</CategoryType>
        <Mechanics>Bluffing</Mechanics>
      </Boardgame>
    </Boardgames>
  </Creator>
  <Creator>
    <FirstName>Cone</FirstName>
    <LastName>Jay</LastName>
    <Boardgames />
  </Creator>
</Creators>"#;

#[test]
fn import_creators_reports_each_record_and_skips_invalid_ones() {
    let mut conn = open_db_in_memory().unwrap();
    let report = ImportService::new(SqliteStore::new(&mut conn))
        .import_creators(CREATORS_XML)
        .unwrap();

    assert_eq!(
        report,
        "Invalid data!\n\
         Successfully imported creator – Debra Edwards with 2 boardgames.\n\
         Invalid data!\n\
         Successfully imported creator – Cone Jay with 0 boardgames."
    );

    let store = SqliteStore::new(&mut conn);
    let creators = store.list_creators().unwrap();
    assert_eq!(creators.len(), 2);
    assert_eq!(creators[0].full_name(), "Debra Edwards");
    let names: Vec<_> = creators[0]
        .boardgames
        .iter()
        .map(|game| game.name.as_str())
        .collect();
    assert_eq!(names, vec!["7 Steps Forward", "Castles of Burgundy"]);
    assert!(creators[1].boardgames.is_empty());
    assert_eq!(store.boardgame_ids().unwrap().len(), 2);
}

#[test]
fn imported_boardgames_keep_mapped_fields() {
    let mut conn = open_db_in_memory().unwrap();
    ImportService::new(SqliteStore::new(&mut conn))
        .import_creators(CREATORS_XML)
        .unwrap();

    let store = SqliteStore::new(&mut conn);
    let game = store.get_boardgame(1).unwrap().unwrap();
    assert_eq!(game.name, "7 Steps Forward");
    assert_eq!(game.rating, 7.5);
    assert_eq!(game.year_published, 2019);
    assert_eq!(game.category_type, CategoryType::Party);
    assert_eq!(game.mechanics, "Dice Rolling");
    assert!(store.get_boardgame(99).unwrap().is_none());
}

#[test]
fn malformed_payload_writes_nothing() {
    let mut conn = open_db_in_memory().unwrap();
    let err = ImportService::new(SqliteStore::new(&mut conn))
        .import_creators("<Creators><Creator>")
        .unwrap_err();
    assert!(matches!(err, ImportError::Xml(_)));

    let store = SqliteStore::new(&mut conn);
    assert!(store.list_creators().unwrap().is_empty());
}

#[test]
fn empty_creators_document_yields_empty_report() {
    let mut conn = open_db_in_memory().unwrap();
    let report = ImportService::new(SqliteStore::new(&mut conn))
        .import_creators("<Creators></Creators>")
        .unwrap();
    assert_eq!(report, "");
}
