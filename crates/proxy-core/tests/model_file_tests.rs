//! Integration tests for loading the description model from disk.

use proxy_gen_core::ApiDescriptionModel;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_model_loads_from_cache_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("app-generate-proxy.json");

    let value = json!({
        "modules": {
            "identity": {
                "rootPath": "identity",
                "remoteServiceName": "AbpIdentity",
                "controllers": {
                    "Volo.Abp.Identity.IdentityUserController": {
                        "controllerName": "IdentityUser",
                        "type": "Volo.Abp.Identity.IdentityUserController",
                        "interfaces": [{ "type": "Volo.Abp.Identity.IIdentityUserAppService" }],
                        "actions": {
                            "DeleteAsyncById": {
                                "uniqueName": "DeleteAsyncById",
                                "name": "DeleteAsync",
                                "httpMethod": "DELETE",
                                "url": "api/identity/users/{id}",
                                "parametersOnMethod": [{ "name": "id", "type": "System.Guid" }],
                                "parameters": [{ "name": "id", "type": "System.Guid" }],
                                "returnValue": { "type": "System.Void" },
                                "implementFrom": "Volo.Abp.Application.Services.IDeleteAppService"
                            }
                        }
                    }
                }
            }
        }
    });
    fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let model = ApiDescriptionModel::from_json_str(&text).unwrap();

    assert_eq!(model.controller_count(), 1);
    let (module, controller) = model.controllers().next().unwrap();
    assert_eq!(module, "identity");
    assert_eq!(controller.controller_name, "IdentityUser");
    assert_eq!(controller.actions["DeleteAsyncById"].name, "DeleteAsync");
}
