//! Integration tests for generating and removing the proxy folder.

use proxy_gen_core::{ApiDescriptionModel, ModuleName, ProxyFolder};
use proxy_gen_files::{GenerateOptions, ProxyFileWriter};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn model() -> ApiDescriptionModel {
    let value = json!({
        "modules": {
            "app": {
                "rootPath": "app",
                "remoteServiceName": "Default",
                "controllers": {
                    "Acme.Books.BookController": {
                        "controllerName": "Book",
                        "type": "Acme.Books.BookController",
                        "interfaces": [{ "type": "Acme.Books.IBookAppService" }],
                        "actions": {
                            "GetAsyncById": {
                                "uniqueName": "GetAsyncById",
                                "name": "GetAsync",
                                "parametersOnMethod": [{ "name": "id", "type": "System.Guid" }],
                                "parameters": [{ "name": "id", "type": "System.Guid" }],
                                "returnValue": { "type": "Acme.Books.BookDto" },
                                "implementFrom": "Acme.Books.IBookAppService"
                            }
                        }
                    },
                    "Acme.Health.HealthController": {
                        "controllerName": "Health",
                        "type": "Acme.Health.HealthController",
                        "interfaces": [],
                        "actions": {}
                    }
                }
            }
        }
    });
    ApiDescriptionModel::from_json_str(&value.to_string()).unwrap()
}

fn options(temp: &TempDir) -> GenerateOptions {
    GenerateOptions::new(temp.path(), "Acme.HttpApi.Client")
}

#[test]
fn test_generate_writes_proxy_partial_and_artifact() {
    let temp = TempDir::new().unwrap();
    let writer = ProxyFileWriter::new().unwrap();

    let report = writer.generate(&model(), &options(&temp)).unwrap();

    let out = temp.path().join("ClientProxies");
    assert_eq!(report.written, vec![out.join("BookClientProxy.cs")]);
    assert_eq!(report.created, vec![out.join("BookClientProxy.partial.cs")]);
    assert!(report.kept.is_empty());
    assert_eq!(report.skipped, vec!["Health".to_string()]);

    let proxy = fs::read_to_string(out.join("BookClientProxy.cs")).unwrap();
    assert!(proxy.contains("namespace Acme.HttpApi.Client.ClientProxies"));
    assert!(proxy.contains("return await RequestAsync<BookDto>(nameof(GetAsync), id);"));

    assert!(!out.join("HealthClientProxy.cs").exists());
    assert!(out.join("app-generate-proxy.json").exists());
}

#[test]
fn test_regeneration_overwrites_proxy_but_keeps_customizations() {
    let temp = TempDir::new().unwrap();
    let writer = ProxyFileWriter::new().unwrap();
    let out = temp.path().join("ClientProxies");

    writer.generate(&model(), &options(&temp)).unwrap();
    fs::write(out.join("BookClientProxy.cs"), "stale").unwrap();
    fs::write(out.join("BookClientProxy.partial.cs"), "// user code").unwrap();

    let report = writer.generate(&model(), &options(&temp)).unwrap();

    assert!(report.created.is_empty());
    assert_eq!(report.kept, vec![out.join("BookClientProxy.partial.cs")]);
    assert_ne!(fs::read_to_string(out.join("BookClientProxy.cs")).unwrap(), "stale");
    assert_eq!(
        fs::read_to_string(out.join("BookClientProxy.partial.cs")).unwrap(),
        "// user code"
    );
}

#[test]
fn test_custom_folder_and_module() {
    let temp = TempDir::new().unwrap();
    let writer = ProxyFileWriter::new().unwrap();
    let options = options(&temp)
        .with_folder(ProxyFolder::new("Proxies/Books").unwrap())
        .with_module(ModuleName::new("books"));

    writer.generate(&model(), &options).unwrap();

    let out = temp.path().join("Proxies").join("Books");
    let proxy = fs::read_to_string(out.join("BookClientProxy.cs")).unwrap();
    assert!(proxy.contains("namespace Acme.HttpApi.Client.Proxies.Books"));
    assert!(out.join("books-generate-proxy.json").exists());
}

#[test]
fn test_artifact_round_trips_model() {
    let temp = TempDir::new().unwrap();
    let writer = ProxyFileWriter::new().unwrap();
    let model = model();

    let report = writer.generate(&model, &options(&temp)).unwrap();

    let artifact = fs::read_to_string(report.artifact).unwrap();
    assert!(artifact.contains("\n  \"modules\""));
    assert_eq!(ApiDescriptionModel::from_json_str(&artifact).unwrap(), model);
}

#[test]
fn test_artifact_keeps_every_service_field() {
    let temp = TempDir::new().unwrap();
    let writer = ProxyFileWriter::new().unwrap();
    let input = json!({
        "modules": {
            "app": {
                "rootPath": "app",
                "remoteServiceName": "Default",
                "controllers": {
                    "Acme.Books.BookController": {
                        "controllerName": "Book",
                        "controllerGroupName": "Book",
                        "isRemoteService": true,
                        "isIntegrationService": false,
                        "apiVersion": null,
                        "type": "Acme.Books.BookController",
                        "interfaces": [{
                            "type": "Acme.Books.IBookAppService",
                            "name": "IBookAppService",
                            "methods": [{
                                "name": "GetAsync",
                                "parametersOnMethod": [],
                                "returnValue": { "type": "Acme.Books.BookDto", "typeSimple": "Acme.Books.BookDto" }
                            }]
                        }],
                        "actions": {
                            "GetAsyncById": {
                                "uniqueName": "GetAsyncById",
                                "name": "GetAsync",
                                "httpMethod": "GET",
                                "url": "api/app/book/{id}",
                                "supportedVersions": [],
                                "parametersOnMethod": [{
                                    "name": "id",
                                    "typeAsString": "System.Guid, System.Private.CoreLib",
                                    "type": "System.Guid",
                                    "typeSimple": "string",
                                    "isOptional": false,
                                    "defaultValue": null
                                }],
                                "parameters": [{
                                    "nameOnMethod": "id",
                                    "name": "id",
                                    "jsonName": null,
                                    "type": "System.Guid",
                                    "typeSimple": "string",
                                    "isOptional": false,
                                    "defaultValue": null,
                                    "constraintTypes": [],
                                    "bindingSourceId": "Path",
                                    "descriptorName": ""
                                }],
                                "returnValue": {
                                    "type": "Acme.Books.BookDto",
                                    "typeSimple": "Acme.Books.BookDto"
                                },
                                "allowAnonymous": null,
                                "implementFrom": "Acme.Books.IBookAppService"
                            }
                        }
                    }
                }
            }
        },
        "types": {
            "Acme.Books.BookDto": {
                "baseType": null,
                "isEnum": false,
                "properties": [{ "name": "Name", "type": "System.String" }]
            }
        }
    });
    let model = ApiDescriptionModel::from_json_str(&input.to_string()).unwrap();

    let report = writer.generate(&model, &options(&temp)).unwrap();

    let artifact = fs::read_to_string(report.artifact).unwrap();
    let saved: serde_json::Value = serde_json::from_str(&artifact).unwrap();
    assert_eq!(saved, input);
}

#[test]
fn test_remove_deletes_folder_recursively() {
    let temp = TempDir::new().unwrap();
    let writer = ProxyFileWriter::new().unwrap();
    writer.generate(&model(), &options(&temp)).unwrap();

    let report = writer.remove(&options(&temp)).unwrap();

    assert!(report.removed);
    assert!(!temp.path().join("ClientProxies").exists());
}

#[test]
fn test_remove_twice_is_harmless() {
    let temp = TempDir::new().unwrap();
    let writer = ProxyFileWriter::new().unwrap();

    assert!(!writer.remove(&options(&temp)).unwrap().removed);
    assert!(!writer.remove(&options(&temp)).unwrap().removed);
}
