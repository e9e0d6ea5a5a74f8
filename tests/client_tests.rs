//! Integration tests for the ViaCepClient using mockito for HTTP mocking.

use cep_agenda::{CepApiError, ViaCepClient};
use mockito::Server;

#[test]
fn test_fetch_address_success() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/01001000/json/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "complemento": "lado ímpar",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308",
            "ddd": "11"
        }"#,
        )
        .create();

    let client = ViaCepClient::with_base_url(server.url());
    let address = client.fetch_address("01001000").unwrap();

    mock.assert();
    assert_eq!(address.postal_code, "01001-000");
    assert_eq!(address.street, "Praça da Sé");
    assert_eq!(address.neighborhood, "Sé");
    assert_eq!(address.city, "São Paulo");
    assert_eq!(address.region, "SP");
}

#[test]
fn test_fetch_address_provider_erro_flag() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/99999999/json/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"erro": true}"#)
        .create();

    let client = ViaCepClient::with_base_url(server.url());
    let result = client.fetch_address("99999999");

    mock.assert();
    match result {
        Err(CepApiError::CepNotFound(code)) => assert_eq!(code, "99999999"),
        other => panic!("Expected CepNotFound, got: {:?}", other),
    }
}

#[test]
fn test_fetch_address_erro_flag_as_string() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/99999999/json/")
        .with_status(200)
        .with_body(r#"{"erro": "true"}"#)
        .create();

    let client = ViaCepClient::with_base_url(server.url());
    assert!(matches!(
        client.fetch_address("99999999"),
        Err(CepApiError::CepNotFound(_))
    ));
}

#[test]
fn test_fetch_address_erro_flag_ignored_with_fields() {
    let mut server = Server::new();

    // erro absent plus full payload: flag must default to false
    let _mock = server
        .mock("GET", "/01001000/json/")
        .with_status(200)
        .with_body(r#"{"cep": "01001-000", "logradouro": "Praça da Sé", "bairro": "Sé", "localidade": "São Paulo", "uf": "SP"}"#)
        .create();

    let client = ViaCepClient::with_base_url(server.url());
    assert!(client.fetch_address("01001000").is_ok());
}

#[test]
fn test_fetch_address_server_error() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/01001000/json/")
        .with_status(500)
        .with_body("Internal Server Error")
        .create();

    let client = ViaCepClient::with_base_url(server.url());
    let result = client.fetch_address("01001000");

    mock.assert();
    match result {
        Err(CepApiError::ApiError { status, .. }) => assert_eq!(status, 500),
        other => panic!("Expected ApiError, got: {:?}", other),
    }
}

#[test]
fn test_fetch_address_bad_request() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/01001000/json/")
        .with_status(400)
        .with_body("Bad Request")
        .create();

    let client = ViaCepClient::with_base_url(server.url());
    assert!(matches!(
        client.fetch_address("01001000"),
        Err(CepApiError::ApiError { status: 400, .. })
    ));
}

#[test]
fn test_fetch_address_malformed_body() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/01001000/json/")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create();

    let client = ViaCepClient::with_base_url(server.url());
    assert!(matches!(
        client.fetch_address("01001000"),
        Err(CepApiError::JsonError(_))
    ));
}
