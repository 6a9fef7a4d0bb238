pub mod whatsapp;

use crate::models::{BookingRequest, ServiceType};

const DATE_FORMAT: &str = "%d/%m/%Y";

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Sim ✅"
    } else {
        "Não ❌"
    }
}

/// The WhatsApp text a cleared booking request is sent as.
pub fn compose_booking_message(business_name: &str, request: &BookingRequest) -> String {
    let form = &request.form;
    let entry = request.window.entry.format(DATE_FORMAT);
    let exit = request.window.exit.format(DATE_FORMAT);

    let period = match request.service {
        ServiceType::DayUse => format!("Data: {entry}"),
        ServiceType::Lodging => format!("De: {entry}\nAté: {exit}"),
    };

    format!(
        "Olá {business_name}! 🐾 Gostaria de solicitar uma reserva.\n\
         \n\
         🐶 *Dados do Pet:*\n\
         Nome: {pet}\n\
         Raça: {breed}\n\
         Porte: {size}\n\
         \n\
         👤 *Dados do Tutor:*\n\
         Nome: {tutor}\n\
         WhatsApp: {phone}\n\
         \n\
         📅 *Período ({service}):*\n\
         {period}\n\
         \n\
         📋 *Saúde:*\n\
         Vacinas em dia: {vaccines}\n\
         Castrado/Sem Cio: {neutered}\n\
         \n\
         📸 *Estou enviando a foto da carteira de vacina em seguida!*",
        pet = form.pet_name.trim(),
        breed = form.breed.trim(),
        size = form.size.label(),
        tutor = form.tutor_name.trim(),
        phone = form.phone.trim(),
        service = request.service.label(),
        vaccines = yes_no(form.vaccinated),
        neutered = yes_no(form.neutered),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingForm, PetSize, StayWindow};
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn request(service: ServiceType, window: StayWindow) -> BookingRequest {
        BookingRequest {
            service,
            window,
            form: BookingForm {
                tutor_name: " Ana Souza ".to_string(),
                phone: "(27) 99999-0000".to_string(),
                pet_name: "Thor".to_string(),
                breed: "Labrador".to_string(),
                size: PetSize::Grande,
                vaccinated: true,
                neutered: false,
            },
        }
    }

    #[test]
    fn test_lodging_message() {
        let req = request(
            ServiceType::Lodging,
            StayWindow::new(d("2030-02-01"), d("2030-02-04")),
        );
        let text = compose_booking_message("RK9", &req);
        assert!(text.starts_with("Olá RK9! 🐾"));
        assert!(text.contains("Nome: Thor\nRaça: Labrador\nPorte: Grande"));
        assert!(text.contains("Nome: Ana Souza\nWhatsApp: (27) 99999-0000"));
        assert!(text.contains("📅 *Período (Hospedagem):*\nDe: 01/02/2030\nAté: 04/02/2030"));
        assert!(text.contains("Vacinas em dia: Sim ✅"));
        assert!(text.contains("Castrado/Sem Cio: Não ❌"));
        assert!(text.ends_with("em seguida!*"));
    }

    #[test]
    fn test_day_use_message_has_single_date() {
        let req = request(ServiceType::DayUse, StayWindow::single(d("2030-02-01")));
        let text = compose_booking_message("RK9", &req);
        assert!(text.contains("(Day Use):*\nData: 01/02/2030\n"));
        assert!(!text.contains("Até:"));
    }
}
