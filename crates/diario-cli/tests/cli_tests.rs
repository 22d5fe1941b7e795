use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RESULTS: &str = "tests/fixtures/results.json";
const STREAM: &str = "tests/fixtures/stream.jsonl";

/// `diario` with its data directory pointed at an empty temp dir
#[allow(deprecated)]
fn diario(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("diario").unwrap();
    cmd.env("DIARIO_PATH", data_dir.path());
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_classify_table() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(
        diario(&dir)
            .args(["classify", "-"])
            .write_stdin(r#"[{"term":"ADITAMENTO","amendment_number":"2"},{"term":"PORTARIA"}]"#),
    );

    assert_eq!(
        stdout,
        "  #  TYPE           CATEGORY    ICON            LABEL\n\
         \x20 1  ADITAMENTO     aditamento  file-pen        [ADITAMENTO 2]\n\
         \x20 2  OUTRO          outro       file            [PORTARIA]\n"
    );
}

#[test]
fn test_classify_json() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(diario(&dir).args(["--format", "json", "classify", RESULTS]));

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 7);
    assert_eq!(records[0]["canonical_type"], "CONTRATO");
    assert_eq!(records[0]["icon_tag"], "file-signature");
    assert_eq!(records[1]["display_label"], "ADITAMENTO 2");
    assert_eq!(records[3]["visual_category"], "destaque");
}

#[test]
fn test_classify_empty_input() {
    let dir = TempDir::new().unwrap();
    diario(&dir)
        .args(["classify", "-"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("Nenhum resultado encontrado.\n");
}

#[test]
fn test_render_text_from_result_message() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(
        diario(&dir).args(["render", "-"]).write_stdin(
            r#"{"type":"result","data":[{"term":"ADITAMENTO","summary":"","modality":"-","amendment_number":"2","parent_contract":"15","value":null}]}"#,
        ),
    );

    insta::assert_snapshot!(stdout, @r"
    RESULTADOS - DIÁRIO OFICIAL

    [ADITAMENTO 2]
    Processo SEI: -
    Aditamento nº 2 ao Contrato nº 15
    Contratada: -
    Objeto: -
    Data da Assinatura: -
    Data da Publicação: -
    Valor: Sem efeito financeiros
    ");
}

#[test]
fn test_render_cards() {
    let dir = TempDir::new().unwrap();
    diario(&dir)
        .args(["render", RESULTS, "--view", "cards"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[LICITAÇÃO] 07/03/2024 (gavel)"))
        .stdout(predicate::str::contains("Processo: 6016.2024/0001234-5"))
        .stdout(predicate::str::contains("PDF: https://diario.example/045.pdf"));
}

#[test]
fn test_render_empty_input() {
    let dir = TempDir::new().unwrap();
    diario(&dir)
        .args(["render", "-"])
        .write_stdin(r#"{"type":"result"}"#)
        .assert()
        .success()
        .stdout("Sem resultados.\n");
}

#[test]
fn test_render_with_anonymizing_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[render]\nanonymize_documents = true\n").unwrap();

    let input = r#"[{"term":"CONTRATO","contractor":"JOÃO DA SILVA","company_doc":"123.456.789-01"}]"#;

    diario(&dir)
        .args(["render", "-"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Contrato nº S/N - JOÃO DA SILVA, 123.456.789-01"));

    diario(&dir)
        .arg("--config")
        .arg(&config)
        .args(["render", "-"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Contrato nº S/N - JOÃO DA SILVA, 123.***.***-01"));
}

#[test]
fn test_missing_config_file_is_error() {
    let dir = TempDir::new().unwrap();
    diario(&dir)
        .args(["--config", "/nonexistent/diario.toml", "stats", RESULTS])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_stats_plain() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(diario(&dir).args(["stats", RESULTS]));

    insta::assert_snapshot!(stdout, @r"
    Contratos:    1
    Pregões:      2
    Aditamentos:  1
    Outros:       3
    Total:        7
    ");
}

#[test]
fn test_stats_json_for_empty_input() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(
        diario(&dir)
            .args(["--format", "json", "stats", "-"])
            .write_stdin("[]"),
    );

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "contratos": 0,
            "pregoes": 0,
            "aditamentos": 0,
            "outros": 0,
            "total": 0
        })
    );
}

#[test]
fn test_export_writes_csv() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.csv");

    diario(&dir)
        .args(["export", RESULTS, "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 7 records to"));

    let csv = std::fs::read_to_string(&out).unwrap();
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows.len(), 8);
    assert_eq!(
        rows[0],
        r#""Data","Termo","Objeto","Valor","Processo","Contratada","Link PDF""#
    );
    assert!(rows[3].contains(r#""Aquisição de ""bens"" de consumo""#));
}

#[test]
fn test_export_default_file_name() {
    let dir = TempDir::new().unwrap();

    diario(&dir)
        .current_dir(dir.path())
        .args(["export", "-"])
        .write_stdin(r#"[{"term":"CONTRATO"}]"#)
        .assert()
        .success();

    assert!(dir.path().join("resultados_diario.csv").exists());
}

#[test]
fn test_export_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.csv");

    diario(&dir)
        .args(["export", "-", "-o"])
        .arg(&out)
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Nada para exportar!"));

    assert!(!out.exists());
}

#[test]
fn test_replay_stream() {
    let dir = TempDir::new().unwrap();
    diario(&dir)
        .args(["replay", STREAM])
        .assert()
        .success()
        .stdout(predicate::str::contains("» Conectando ao Diário Oficial..."))
        .stdout(predicate::str::contains("» 2 registros recebidos"))
        .stdout(predicate::str::contains("» Raspagem concluída!"))
        .stdout(predicate::str::contains("[ADITAMENTO 1]"))
        .stdout(predicate::str::contains("Aditamentos:  1"));
}

#[test]
fn test_replay_stats_disabled() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[stats]\nenabled = false\n").unwrap();

    diario(&dir)
        .args(["replay", STREAM])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:").not());
}

#[test]
fn test_replay_error_message() {
    let dir = TempDir::new().unwrap();
    diario(&dir)
        .args(["replay", "-"])
        .write_stdin("{\"type\":\"log\",\"message\":\"Iniciando\"}\n{\"type\":\"error\"}\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("» Erro: Erro desconhecido"))
        .stderr(predicate::str::contains(
            "Error: Ocorreu um erro durante a raspagem: Erro desconhecido",
        ));
}

#[test]
fn test_replay_json_summary() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(diario(&dir).args(["--format", "json", "replay", STREAM]));

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["status"], "Raspagem concluída!");
    assert_eq!(value["error"], serde_json::Value::Null);
    assert_eq!(value["in_progress"], false);
    assert_eq!(value["stats"]["total"], 2);
    assert_eq!(value["records"].as_array().unwrap().len(), 2);
}

#[test]
fn test_request_payload() {
    let dir = TempDir::new().unwrap();
    let terms = dir.path().join("terms.txt");
    std::fs::write(&terms, "  PREGÃO \n\nADITAMENTO\n").unwrap();

    let stdout = stdout_of(
        diario(&dir)
            .args(["request", "--start", "2024-03-05", "--end", "2024-03-08"])
            .args(["--term", "CONTRATO", "--terms-file"])
            .arg(&terms),
    );

    assert_eq!(
        stdout,
        "{\"action\":\"start_search\",\"payload\":{\"start_date\":\"05/03/2024\",\"end_date\":\"08/03/2024\",\"terms\":[\"CONTRATO\",\"PREGÃO\",\"ADITAMENTO\"]}}\n"
    );
}

#[test]
fn test_request_rejects_inverted_range() {
    let dir = TempDir::new().unwrap();
    diario(&dir)
        .args(["request", "--start", "2024-03-09", "--end", "2024-03-08"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Data inicial não pode ser superior à data final",
        ));
}
