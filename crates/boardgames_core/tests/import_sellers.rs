use boardgames_core::db::open_db_in_memory;
use boardgames_core::{ImportError, ImportService, SellerRepository, SqliteStore};
use rusqlite::Connection;

const SEED_XML: &str = r#"<Creators>
  <Creator>
    <FirstName>Cone</FirstName>
    <LastName>Jay</LastName>
    <Boardgames>
      <Boardgame>
        <Name>Bohnanza Deluxe</Name>
        <Rating>6.5</Rating>
        <YearPublished>2019</YearPublished>
        <CategoryType>3</CategoryType>
        <Mechanics>Trading</Mechanics>
      </Boardgame>
      <Boardgame>
        <Name>Coup Reformation</Name>
        <Rating>7.1</Rating>
        <YearPublished>2021</YearPublished>
        <CategoryType>1</CategoryType>
        <Mechanics>Hidden Roles</Mechanics>
      </Boardgame>
    </Boardgames>
  </Creator>
</Creators>"#;

fn seeded_conn() -> Connection {
    let mut conn = open_db_in_memory().unwrap();
    ImportService::new(SqliteStore::new(&mut conn))
        .import_creators(SEED_XML)
        .unwrap();
    conn
}

fn link_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM boardgames_sellers;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn duplicate_and_missing_boardgame_ids_are_handled_per_id() {
    let mut conn = seeded_conn();
    let report = ImportService::new(SqliteStore::new(&mut conn))
        .import_sellers(
            r#"[{"Name":"Board Bazaar","Address":"12 Main St","Country":"USA","Website":"www.boardbazaar.com","Boardgames":[1,1,2,999]}]"#,
        )
        .unwrap();

    assert_eq!(
        report,
        "Invalid data!\nSuccessfully imported seller - Board Bazaar with 2 boardgames."
    );

    let store = SqliteStore::new(&mut conn);
    let sellers = store.list_sellers_with_boardgames().unwrap();
    assert_eq!(sellers.len(), 1);
    let links: Vec<_> = sellers[0]
        .seller
        .boardgames_sellers
        .iter()
        .map(|link| link.boardgame_id)
        .collect();
    assert_eq!(links, vec![1, 2]);
    assert_eq!(sellers[0].boardgames.len(), 2);
    assert_eq!(link_count(&conn), 2);
}

#[test]
fn invalid_sellers_are_skipped_entirely() {
    let mut conn = seeded_conn();
    let report = ImportService::new(SqliteStore::new(&mut conn))
        .import_sellers(
            r#"[
                {"Name":"Shop","Address":"12 Main St","Country":"USA","Website":"www.shop.com","Boardgames":[1]},
                {"Name":"Games Galore","Address":"1","Country":"USA","Website":"www.galore.com","Boardgames":[1]},
                {"Name":"Games Galore","Address":"Main 1","Country":"","Website":"www.galore.com","Boardgames":[1]},
                {"Name":"Games Galore","Address":"Main 1","Country":"UK","Website":"galore.com","Boardgames":[1]},
                {"Name":"Meeple Market","Address":"Oak Road 5","Country":"UK","Website":"www.meeple-market.com"}
            ]"#,
        )
        .unwrap();

    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[..4].iter().all(|line| *line == "Invalid data!"));
    assert_eq!(
        lines[4],
        "Successfully imported seller - Meeple Market with 0 boardgames."
    );

    let store = SqliteStore::new(&mut conn);
    let sellers = store.list_sellers_with_boardgames().unwrap();
    assert_eq!(sellers.len(), 1);
    assert_eq!(sellers[0].seller.country, "UK");
    assert_eq!(link_count(&conn), 0);
}

#[test]
fn every_seller_sees_the_same_boardgame_snapshot() {
    let mut conn = seeded_conn();
    let report = ImportService::new(SqliteStore::new(&mut conn))
        .import_sellers(
            r#"[
                {"Name":"First Shop","Address":"Elm 1","Country":"USA","Website":"www.first.com","Boardgames":[2]},
                {"Name":"Second Shop","Address":"Elm 2","Country":"USA","Website":"www.second.com","Boardgames":[2,3]}
            ]"#,
        )
        .unwrap();

    assert_eq!(
        report,
        "Successfully imported seller - First Shop with 1 boardgames.\n\
         Invalid data!\n\
         Successfully imported seller - Second Shop with 1 boardgames."
    );
    assert_eq!(link_count(&conn), 2);
}

#[test]
fn non_array_payload_is_rejected_without_writes() {
    let mut conn = seeded_conn();
    let err = ImportService::new(SqliteStore::new(&mut conn))
        .import_sellers(r#"{"Name":"Board Bazaar"}"#)
        .unwrap_err();
    assert!(matches!(err, ImportError::Json(_)));

    let store = SqliteStore::new(&mut conn);
    assert!(store.list_sellers_with_boardgames().unwrap().is_empty());
}
