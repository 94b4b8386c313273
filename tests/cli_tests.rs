use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pareja(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pareja").unwrap();
    cmd.env("PAREJA_DATA_DIR", data_dir.path())
        .env("PAREJA_USER", "C")
        .env_remove("PAREJA_LOG");
    cmd
}

#[test]
fn add_then_recent_lists_the_expense() {
    let data_dir = TempDir::new().unwrap();

    pareja(&data_dir)
        .args(["add", "Supermercado", "125.50", "--category", "Comida"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registrado"));

    pareja(&data_dir)
        .arg("recent")
        .assert()
        .success()
        .stdout(predicate::str::contains("Supermercado"))
        .stdout(predicate::str::contains("125.50"));

    assert!(data_dir
        .path()
        .join("data")
        .join("app-pareja-expenses.json")
        .exists());
}

#[test]
fn zero_amount_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    pareja(&data_dir)
        .args(["add", "Nada", "0", "--category", "Otros"])
        .assert()
        .failure();

    assert!(!data_dir
        .path()
        .join("data")
        .join("app-pareja-expenses.json")
        .exists());
}

#[test]
fn summary_reflects_new_income() {
    let data_dir = TempDir::new().unwrap();

    pareja(&data_dir)
        .args(["income", "Sueldo", "2000"])
        .assert()
        .success();

    pareja(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resumen"))
        .stdout(predicate::str::contains("7240.50"));
}

#[test]
fn goal_list_shows_seeded_goals() {
    let data_dir = TempDir::new().unwrap();

    pareja(&data_dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vacaciones en Cusco"));
}

#[test]
fn export_json_writes_snapshot_file() {
    let data_dir = TempDir::new().unwrap();
    let output = data_dir.path().join("snapshot.json");

    pareja(&data_dir)
        .args(["add", "Taxi", "15", "--category", "Transporte"])
        .assert()
        .success();
    pareja(&data_dir)
        .args(["export", "json"])
        .arg(&output)
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("\"schemaVersion\""));
    assert!(text.contains("Taxi"));
}

#[test]
fn config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    pareja(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("app-pareja-financial-data.json"))
        .stdout(predicate::str::contains("Registro de cambios"));
}

#[test]
fn history_shows_audited_changes() {
    let data_dir = TempDir::new().unwrap();

    pareja(&data_dir)
        .args(["budget", "set", "Comida", "800"])
        .assert()
        .success();

    pareja(&data_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE Budget"));
}

#[test]
fn seeded_goal_id_survives_between_runs() {
    let data_dir = TempDir::new().unwrap();

    pareja(&data_dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("goal-00000001"));

    pareja(&data_dir)
        .args(["goal", "update", "goal-00000001", "--deposit", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meta actualizada"));
}

#[test]
fn oversized_amount_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    pareja(&data_dir)
        .args(["add", "Casa", "92233720368547759", "--category", "Hogar"])
        .assert()
        .failure();
}

#[test]
fn exported_snapshot_validates() {
    let data_dir = TempDir::new().unwrap();
    let output = data_dir.path().join("snapshot.json");

    pareja(&data_dir)
        .args(["export", "json"])
        .arg(&output)
        .assert()
        .success();
    pareja(&data_dir)
        .args(["export", "validate"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 metas"));
}
