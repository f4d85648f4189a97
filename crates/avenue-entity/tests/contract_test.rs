//! Integration tests for the wire contract as seen by a collaborator.

use serde_json::{Value, json};

use avenue_core::types::{FolderId, UserId};
use avenue_entity::folder::FolderForest;
use avenue_entity::{
    Breadcrumb, File, Folder, User, compose_folder_contents, parse_file, parse_folder, parse_folder_contents,
    parse_user, to_wire, wrap_error, wrap_loading,
};

fn users() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "email": "root@example.com",
            "firstName": null,
            "lastName": null,
            "canLogin": true,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": null,
            "deletedAt": null
        }),
        json!({
            "id": 2,
            "email": "ada@example.com",
            "firstName": "Ada",
            "lastName": "",
            "canLogin": false,
            "isAdmin": true,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-03-04T05:06:07Z",
            "deletedAt": "2024-04-01T00:00:00Z"
        }),
        json!({
            "id": 3,
            "email": "grace@example.com",
            "firstName": "Grace",
            "lastName": "Hopper",
            "canLogin": true,
            "isAdmin": false,
            "quota": 1000,
            "spaceUsed": 1000,
            "createdAt": "2023-12-31T23:59:59Z",
            "updatedAt": null,
            "deletedAt": null
        }),
        json!({
            "id": 4,
            "email": "linus@example.com",
            "firstName": "Linus",
            "lastName": null,
            "canLogin": false,
            "createdAt": "2024-01-01T10:00:00+02:00",
            "updatedAt": "2024-01-01T10:00:00.12Z",
            "deletedAt": "2024-02-29T23:30:00.000000001-05:00"
        }),
    ]
}

#[test]
fn test_user_round_trip_for_every_revision() {
    for raw in users() {
        let user = parse_user(&raw).expect("valid user");
        assert_eq!(to_wire(&user).expect("serialize"), raw);
    }
}

#[test]
fn test_folder_and_file_round_trip() {
    let folder = json!({ "folder_id": "f-1", "name": "Docs", "parent": null, "owner_id": 3 });
    assert_eq!(to_wire(&parse_folder(&folder).unwrap()).unwrap(), folder);

    let file = json!({
        "id": "file-9",
        "name": "notes",
        "extension": "md",
        "file_size": 0,
        "parent": "f-1",
        "created_at": "2024-05-05T05:05:05Z",
        "delete_time": null
    });
    assert_eq!(to_wire(&parse_file(&file).unwrap()).unwrap(), file);
}

#[test]
fn test_parsed_users_never_deleted_and_loginable() {
    for raw in users() {
        let user = parse_user(&raw).unwrap();
        assert!(!(user.is_deleted() && user.can_login));
    }
}

#[test]
fn test_quota_violation_example() {
    let raw = json!({
        "id": 1,
        "email": "a@b.com",
        "canLogin": true,
        "createdAt": "2024-01-01T00:00:00Z",
        "quota": 1000,
        "spaceUsed": 1200
    });
    let err = parse_user(&raw).unwrap_err();
    assert_eq!(err.field, "spaceUsed");
}

#[test]
fn test_serde_decoding_applies_the_same_checks() {
    let over_quota = json!({
        "id": 1,
        "email": "a@b.com",
        "canLogin": true,
        "createdAt": "2024-01-01T00:00:00Z",
        "deletedAt": "2024-01-02T00:00:00Z",
        "quota": 1000,
        "spaceUsed": 1200
    });
    let err = serde_json::from_value::<User>(over_quota).unwrap_err();
    assert!(err.to_string().contains("spaceUsed"));

    for raw in users() {
        let user: User = serde_json::from_value(raw.clone()).expect("valid user");
        assert_eq!(user, parse_user(&raw).unwrap());
    }

    let negative = json!({
        "id": "x", "name": "a", "extension": "b", "file_size": -5,
        "parent": null, "created_at": "2024-01-01T00:00:00Z", "delete_time": null
    });
    assert!(serde_json::from_value::<File>(negative).is_err());

    let orphan = json!({ "folder_id": "", "name": "x", "parent": null, "owner_id": 1 });
    assert!(serde_json::from_value::<Folder>(orphan).is_err());
}

#[test]
fn test_loadable_example_sequence() {
    let loading = wrap_loading("old");
    assert_eq!(
        to_wire(&loading).unwrap(),
        json!({ "data": "old", "loading": true })
    );

    let failed = wrap_error(loading.data, "network down");
    assert_eq!(
        to_wire(&failed).unwrap(),
        json!({ "data": "old", "loading": false, "error": "network down" })
    );
}

#[test]
fn test_compose_preserves_order() {
    let owner = UserId::new(1).unwrap();
    let folders: Vec<Folder> = ["z", "a", "m"]
        .iter()
        .map(|name| Folder::new(*name, None, owner))
        .collect();
    let crumbs: Vec<Breadcrumb> = folders.iter().map(Folder::breadcrumb).collect();

    let contents = compose_folder_contents(folders.clone(), Vec::new(), crumbs.clone());
    assert_eq!(contents.folders, folders);
    assert_eq!(contents.breadcrumbs, crumbs);
}

/// Chains, fans, and mixed shapes: every walk must end at a root within N steps.
#[test]
fn test_parent_walks_terminate() {
    let owner = UserId::new(1).unwrap();
    for size in 1..40usize {
        let folders: Vec<Folder> = (0..size)
            .map(|i| {
                let parent = match i {
                    0 => None,
                    _ if i % 7 == 0 => None,
                    _ => Some(format!("f{}", (i * 3) / 4)),
                };
                Folder {
                    folder_id: format!("f{i}").parse().unwrap(),
                    name: format!("folder {i}"),
                    parent: parent.map(|p| p.parse::<FolderId>().unwrap()),
                    owner_id: owner,
                }
            })
            .collect();

        let forest = FolderForest::new(&folders).expect("generated set is a forest");
        for folder in &folders {
            let chain = forest.ancestors(&folder.folder_id).unwrap();
            assert!(chain.len() <= size);
            assert!(chain[0].is_root());

            let mut seen = std::collections::HashSet::new();
            assert!(chain.iter().all(|f| seen.insert(&f.folder_id)));
        }
    }
}

#[test]
fn test_listing_from_forest_parses_back() {
    let owner = UserId::new(5).unwrap();
    let home = Folder::new("Home", None, owner);
    let work = Folder::new("Work", Some(home.folder_id.clone()), owner);
    let folders = vec![home.clone(), work.clone()];
    let forest = FolderForest::new(&folders).unwrap();

    let contents = forest.list_contents(Some(&home.folder_id), &[]).unwrap();
    assert_eq!(contents.folders, vec![work]);

    let wire = to_wire(&contents).unwrap();
    let parsed = parse_folder_contents(&wire).unwrap();
    assert_eq!(parsed, contents);
}
