use actix_web::{
    get, post,
    web::{self, Data},
    HttpResponse, Responder,
};
use actix_web_lab::respond::Html;
use missing_persons::{
    consts::consts::{NOT_INFORMED, RecordId},
    model::record::{DisappearanceLocation, MissingPersonRecord},
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    page::search_page,
    store::{RecordStore, StoreError},
};

/// Registration fields, named like the original form. The photo is referenced by URL.
#[derive(Deserialize, Debug)]
pub struct RegistrationForm {
    pub nome: String,
    pub data_nascimento: Option<String>,
    pub telefone_contato: Option<String>,
    pub data_desaparecimento: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub local_desaparecimento: Option<String>,
    pub caracteristicas: Option<String>,
    pub foto_url: Option<String>,
}

impl RegistrationForm {
    fn into_record(self, photo_url: String) -> MissingPersonRecord {
        MissingPersonRecord {
            birth_date: self.data_nascimento,
            contact_phone: self.telefone_contato,
            sex: Some(NOT_INFORMED.to_string()),
            disappearance_date: self.data_desaparecimento,
            disappearance_location: DisappearanceLocation {
                city: self.cidade,
                state: self.estado,
                reference_point: self.local_desaparecimento,
            },
            characteristics: self.caracteristicas,
            photo_url,
            // Id is assigned by the store
            ..MissingPersonRecord::new(RecordId(String::new()), self.nome)
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

fn store_failure(err: StoreError) -> HttpResponse {
    log::error!("Records store failure: {}", err);

    HttpResponse::InternalServerError().json(json!({ "message": err.to_string() }))
}

/// Full collection as a JSON array
#[get("/api/dados")]
async fn list_records(store: Data<RecordStore>) -> impl Responder {
    let store = store.clone();

    match web::block(move || store.load()).await {
        Ok(Ok(records)) => HttpResponse::Ok().json(records),
        Ok(Err(err)) => store_failure(err),
        Err(err) => HttpResponse::InternalServerError().json(json!({ "message": err.to_string() })),
    }
}

#[post("/marcar_encontrada/{id}")]
async fn mark_found(store: Data<RecordStore>, id: web::Path<String>) -> impl Responder {
    let id = RecordId(id.into_inner());
    let store = store.clone();
    let lookup_id = id.clone();

    match web::block(move || store.mark_found(&lookup_id)).await {
        Ok(Ok(Some(_))) => {
            log::info!("Record {} marked as found", id);
            HttpResponse::Ok().json(json!({
                "message": format!("Pessoa com ID {} marcada como Encontrada.", id)
            }))
        }
        Ok(Ok(None)) => HttpResponse::NotFound().json(json!({
            "message": format!("Pessoa com ID {} não encontrada.", id)
        })),
        Ok(Err(err)) => store_failure(err),
        Err(err) => HttpResponse::InternalServerError().json(json!({ "message": err.to_string() })),
    }
}

/// Registers a missing person, a photo is required
#[post("/cadastro")]
async fn register(store: Data<RecordStore>, form: web::Json<RegistrationForm>) -> impl Responder {
    let mut form = form.into_inner();

    let photo_url = match form.foto_url.take() {
        Some(photo_url) if !photo_url.is_empty() => photo_url,
        _ => {
            return HttpResponse::BadRequest().json(json!({
                "message": "Erro: Foto não enviada ou arquivo inválido."
            }))
        }
    };

    let record = form.into_record(photo_url);
    let store = store.clone();

    match web::block(move || store.register(record)).await {
        Ok(Ok(record)) => {
            log::info!("Registered record {}", record.id);
            HttpResponse::Created().json(record)
        }
        Ok(Err(err)) => store_failure(err),
        Err(err) => HttpResponse::InternalServerError().json(json!({ "message": err.to_string() })),
    }
}

/// Search page, server-rendered
#[get("/busca")]
async fn search(store: Data<RecordStore>, query: web::Query<SearchQuery>) -> impl Responder {
    let store = store.clone();

    let records = match web::block(move || store.load()).await {
        Ok(Ok(records)) => records,
        Ok(Err(err)) => {
            log::error!("Records store failure: {}", err);
            vec![]
        }
        Err(err) => {
            log::error!("Blocking task failed: {}", err);
            vec![]
        }
    };

    Html(search_page(&records, &query.q))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_records)
        .service(mark_found)
        .service(register)
        .service(search);
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use missing_persons::model::status::RecordStatus;

    use super::*;
    use crate::store::test_utils::new_test_store;

    fn seeded_store() -> Data<RecordStore> {
        let store = new_test_store();

        for name in ["Maria da Silva", "João Pereira"] {
            store
                .register(MissingPersonRecord::new(
                    RecordId(String::new()),
                    name.to_string(),
                ))
                .expect("should seed");
        }

        Data::new(store)
    }

    #[actix_web::test]
    async fn lists_records_as_json() {
        let store = seeded_store();
        let app = test::init_service(App::new().app_data(store.clone()).configure(configure)).await;

        let request = test::TestRequest::get().uri("/api/dados").to_request();
        let records: Vec<MissingPersonRecord> = test::call_and_read_body_json(&app, request).await;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, RecordId::from("001"));
        assert_eq!(records[1].full_name, "João Pereira");
    }

    #[actix_web::test]
    async fn empty_store_lists_empty_array() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(new_test_store()))
                .configure(configure),
        )
        .await;

        let request = test::TestRequest::get().uri("/api/dados").to_request();
        let body = test::call_and_read_body(&app, request).await;

        assert_eq!(body, "[]");
    }

    #[actix_web::test]
    async fn mark_found_persists_status() {
        let store = seeded_store();
        let app = test::init_service(App::new().app_data(store.clone()).configure(configure)).await;

        let request = test::TestRequest::post()
            .uri("/marcar_encontrada/002")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);

        let records = store.load().expect("should load");
        assert_eq!(records[0].classify_status(), RecordStatus::Missing);
        assert_eq!(records[1].classify_status(), RecordStatus::Found);
    }

    #[actix_web::test]
    async fn mark_found_unknown_id_is_404() {
        let store = seeded_store();
        let app = test::init_service(App::new().app_data(store.clone()).configure(configure)).await;

        let request = test::TestRequest::post()
            .uri("/marcar_encontrada/999")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn register_requires_photo() {
        let store = seeded_store();
        let app = test::init_service(App::new().app_data(store.clone()).configure(configure)).await;

        let request = test::TestRequest::post()
            .uri("/cadastro")
            .set_json(json!({ "nome": "Ana", "foto_url": "" }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.load().expect("should load").len(), 2);
    }

    #[actix_web::test]
    async fn register_assigns_next_id() {
        let store = seeded_store();
        let app = test::init_service(App::new().app_data(store.clone()).configure(configure)).await;

        let request = test::TestRequest::post()
            .uri("/cadastro")
            .set_json(json!({
                "nome": "Ana Souza",
                "cidade": "Belo Horizonte",
                "estado": "MG",
                "local_desaparecimento": "Praça da Liberdade",
                "foto_url": "uploads/ana.jpg"
            }))
            .to_request();
        let record: MissingPersonRecord = test::call_and_read_body_json(&app, request).await;

        assert_eq!(record.id, RecordId::from("003"));
        assert_eq!(record.classify_status(), RecordStatus::Missing);
        assert_eq!(record.city(), "Belo Horizonte");
        assert_eq!(record.sex.as_deref(), Some(NOT_INFORMED));
    }

    #[actix_web::test]
    async fn search_page_filters_by_query() {
        let store = seeded_store();
        let app = test::init_service(App::new().app_data(store.clone()).configure(configure)).await;

        let request = test::TestRequest::get().uri("/busca?q=maria").to_request();
        let body = test::call_and_read_body(&app, request).await;
        let html = String::from_utf8(body.to_vec()).expect("should be utf8");

        assert!(html.contains("Maria da Silva"));
        assert!(!html.contains("João Pereira"));
    }

    #[actix_web::test]
    async fn search_page_button_targets_mark_found_route() {
        let store = seeded_store();
        let app = test::init_service(App::new().app_data(store.clone()).configure(configure)).await;

        // given the page lists Maria with a bound mark-found button
        let request = test::TestRequest::get().uri("/busca?q=maria").to_request();
        let body = test::call_and_read_body(&app, request).await;
        let html = String::from_utf8(body.to_vec()).expect("should be utf8");

        assert!(html.contains(r#"data-record-id="001""#));
        assert!(html.contains(r#""path":"/marcar_encontrada""#));

        // when the script posts to the path it was given
        let request = test::TestRequest::post()
            .uri("/marcar_encontrada/001")
            .to_request();
        let response = test::call_service(&app, request).await;

        // then the reloaded page shows the confirmation instead of the button
        assert_eq!(response.status(), StatusCode::OK);

        let request = test::TestRequest::get().uri("/busca?q=maria").to_request();
        let body = test::call_and_read_body(&app, request).await;
        let html = String::from_utf8(body.to_vec()).expect("should be utf8");

        assert!(!html.contains(r#"data-record-id="001""#));
        assert!(html.contains("PESSOA ENCONTRADA"));
    }
}
