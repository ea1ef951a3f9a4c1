use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_store, init_store_with_catalog, setup_store, sib, sib_in, temp_out, write_image};

fn worksheet(store: &str, name: &str) -> String {
    fs::read_to_string(Path::new(store).join("inbound").join(format!("{name}.csv")))
        .expect("read worksheet")
}

#[test]
fn test_init_creates_worksheets() {
    let (_dir, store) = setup_store();

    sib_in(&store)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("initialized"));

    for name in ["inbound", "log", "Dump", "Score Card"] {
        assert!(
            Path::new(&store).join("inbound").join(format!("{name}.csv")).exists(),
            "{name}.csv missing"
        );
    }
    assert!(worksheet(&store, "inbound").starts_with("date,order,category,vendor,image_url"));

    // running again keeps existing worksheets
    sib_in(&store)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn test_lookup_found_and_not_found() {
    let (_dir, store) = setup_store();
    init_store_with_catalog(&store);

    sib_in(&store)
        .args(["lookup", " ORD-200 "])
        .assert()
        .success()
        .stdout(contains("Furniture"))
        .stdout(contains("Ikon"));

    sib_in(&store)
        .args(["lookup", "ORD-999"])
        .assert()
        .success()
        .stdout(contains("not found"));
}

#[test]
fn test_lookup_without_store_fails_open() {
    let (_dir, store) = setup_store();

    sib_in(&store)
        .args(["lookup", "ORD-100"])
        .assert()
        .success()
        .stdout(contains("not found"));

    sib_in(&store)
        .args(["today", "--count"])
        .assert()
        .success()
        .stdout(contains("0"));
}

#[test]
fn test_orders_list_and_filter() {
    let (_dir, store) = setup_store();
    init_store_with_catalog(&store);

    sib_in(&store)
        .arg("orders")
        .assert()
        .success()
        .stdout(contains("ORD-100"))
        .stdout(contains("ORD-300"));

    sib_in(&store)
        .args(["orders", "--filter", "ord-2"])
        .assert()
        .success()
        .stdout(contains("ORD-200"))
        .stdout(contains("ORD-100").not());
}

#[test]
fn test_add_then_today_and_history() {
    let (dir, store) = setup_store();
    init_store_with_catalog(&store);
    let image = write_image(dir.path(), "pallet.jpg");

    sib_in(&store)
        .args(["add", "ORD-100", "--image", &image.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("saved"))
        .stdout(contains("Electronics"));

    let log = worksheet(&store, "inbound");
    assert!(log.contains("ORD-100,Electronics,Acme,file://"));

    sib_in(&store)
        .args(["today", "--count"])
        .assert()
        .success()
        .stdout(contains("1"));

    sib_in(&store)
        .arg("today")
        .assert()
        .success()
        .stdout(contains("ORD-100"));

    sib_in(&store)
        .arg("history")
        .assert()
        .success()
        .stdout(contains("ORD-100"))
        .stdout(contains("1 records"));

    // stored photo
    let images = Path::new(&store).join("images");
    assert_eq!(fs::read_dir(images).expect("images dir").count(), 1);
}

#[test]
fn test_add_unknown_order_with_category_override() {
    let (dir, store) = setup_store();
    init_store_with_catalog(&store);
    let image = write_image(dir.path(), "crate.png");

    sib_in(&store)
        .args([
            "add",
            "NEW-1",
            "--image",
            &image.to_string_lossy(),
            "--category",
            "Returns",
        ])
        .assert()
        .success()
        .stdout(contains("Returns"));

    assert!(worksheet(&store, "inbound").contains("NEW-1,Returns,,file://"));
}

#[test]
fn test_add_missing_image_fails_without_writing() {
    let (dir, store) = setup_store();
    init_store_with_catalog(&store);
    let missing = dir.path().join("nope.jpg");

    sib_in(&store)
        .args(["add", "ORD-100", "--image", &missing.to_string_lossy()])
        .assert()
        .failure()
        .stderr(contains("Error"));

    assert_eq!(worksheet(&store, "inbound").lines().count(), 1);
}

#[test]
fn test_add_imgbb_without_key_fails() {
    let (dir, store) = setup_store();
    init_store_with_catalog(&store);
    let image = write_image(dir.path(), "a.jpg");

    sib()
        .args(["--test", "--store", &store, "--image-host", "imgbb"])
        .args(["add", "ORD-100", "--image", &image.to_string_lossy()])
        .assert()
        .failure()
        .stderr(contains("imgbb_key"));

    assert_eq!(worksheet(&store, "inbound").lines().count(), 1);
}

#[test]
fn test_del_record() {
    let (dir, store) = setup_store();
    init_store_with_catalog(&store);
    let image = write_image(dir.path(), "a.jpg");

    for order in ["ORD-100", "ORD-200"] {
        sib_in(&store)
            .args(["add", order, "--image", &image.to_string_lossy()])
            .assert()
            .success();
    }

    sib_in(&store)
        .args(["del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("ORD-100"));

    let log = worksheet(&store, "inbound");
    assert!(!log.contains("ORD-100"));
    assert!(log.contains("ORD-200"));

    sib_in(&store)
        .args(["del", "5", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Invalid row index"));
}

#[test]
fn test_del_cancelled_without_confirmation() {
    let (dir, store) = setup_store();
    init_store_with_catalog(&store);
    let image = write_image(dir.path(), "a.jpg");

    sib_in(&store)
        .args(["add", "ORD-300", "--image", &image.to_string_lossy()])
        .assert()
        .success();

    sib_in(&store)
        .args(["del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    assert!(worksheet(&store, "inbound").contains("ORD-300"));
}

#[test]
fn test_scorecard_counts() {
    let (dir, store) = setup_store();
    init_store_with_catalog(&store);
    let image = write_image(dir.path(), "a.jpg");

    sib_in(&store)
        .args(["add", "ORD-100", "--image", &image.to_string_lossy()])
        .assert()
        .success();

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let scorecard = Path::new(&store).join("inbound").join("Score Card.csv");
    let mut content = fs::read_to_string(&scorecard).expect("scorecard");
    content.push_str(&format!("{today} 08:00:00,P-1\n{today} 09:00:00,\n2020-01-01 09:00:00,P-3\n"));
    fs::write(&scorecard, content).expect("write scorecard");

    sib_in(&store)
        .arg("scorecard")
        .assert()
        .success()
        .stdout(contains("pickup:"))
        .stdout(contains("inbound:"))
        .stdout(contains(format!("Scorecard {today}")));
}

#[test]
fn test_export_csv_and_json() {
    let (dir, store) = setup_store();
    init_store_with_catalog(&store);
    let image = write_image(dir.path(), "a.jpg");

    sib_in(&store)
        .args(["add", "ORD-200", "--image", &image.to_string_lossy()])
        .assert()
        .success();

    let csv_out = temp_out(dir.path(), "inbound.csv");
    sib_in(&store)
        .args(["export", "--format", "csv", "--file", &csv_out, "--day", "today"])
        .assert()
        .success();
    let content = fs::read_to_string(&csv_out).expect("read csv");
    assert!(content.starts_with("no,date,order,category,vendor,image_url"));
    assert!(content.contains("ORD-200"));

    let json_out = temp_out(dir.path(), "inbound.json");
    sib_in(&store)
        .args(["export", "--format", "json", "--file", &json_out])
        .assert()
        .success();
    let content = fs::read_to_string(&json_out).expect("read json");
    assert!(content.contains("\"order\": \"ORD-200\""));
    assert!(content.contains("\"category\": \"Furniture\""));
}

#[test]
fn test_export_xlsx() {
    let (dir, store) = setup_store();
    init_store_with_catalog(&store);
    let image = write_image(dir.path(), "a.jpg");

    sib_in(&store)
        .args(["add", "ORD-300", "--image", &image.to_string_lossy()])
        .assert()
        .success();

    let out = temp_out(dir.path(), "inbound.xlsx");
    sib_in(&store)
        .args(["export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    assert!(fs::metadata(&out).expect("xlsx written").len() > 0);
}

#[test]
fn test_export_empty_log_message_depends_on_day() {
    let (dir, store) = setup_store();
    init_store(&store);
    let out = temp_out(dir.path(), "empty.csv");

    sib_in(&store)
        .args(["export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("inbound log is empty"))
        .stdout(contains("selected day").not());

    sib_in(&store)
        .args(["export", "--file", &out, "--day", "2020-01-01"])
        .assert()
        .success()
        .stdout(contains("No inbound records found for 2020-01-01"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let (dir, store) = setup_store();
    init_store_with_catalog(&store);
    let image = write_image(dir.path(), "a.jpg");

    sib_in(&store)
        .args(["add", "ORD-300", "--image", &image.to_string_lossy()])
        .assert()
        .success();

    sib_in(&store)
        .args(["export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}

#[test]
fn test_log_print_lists_operations() {
    let (dir, store) = setup_store();
    init_store_with_catalog(&store);
    let image = write_image(dir.path(), "a.jpg");

    sib_in(&store)
        .args(["add", "ORD-100", "--image", &image.to_string_lossy()])
        .assert()
        .success();

    sib_in(&store)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("ORD-100"));
}

#[test]
fn test_shell_session() {
    let (_dir, store) = setup_store();
    init_store_with_catalog(&store);

    sib_in(&store)
        .arg("shell")
        .write_stdin("lookup ORD-300\norders ord-1\ncount\nrefresh\nbogus\nquit\n")
        .assert()
        .success()
        .stdout(contains("Toys"))
        .stdout(contains("Playco"))
        .stdout(contains("ORD-100 | Electronics | Acme"))
        .stdout(contains("Cache cleared"))
        .stdout(contains("Unknown command 'bogus'"));
}

#[test]
fn test_today_rejects_bad_day() {
    let (_dir, store) = setup_store();
    init_store(&store);

    sib_in(&store)
        .args(["today", "--day", "26/02/2026"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}
