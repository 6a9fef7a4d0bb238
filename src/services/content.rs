use url::Url;

use crate::config::AppConfig;
use crate::models::content::{
    About, Contact, FaqEntry, Feature, HouseRule, NavItem, ServiceCard, SiteContent, TeamMember,
    Testimonial,
};
use crate::services::media::{ResponsiveImage, DEFAULT_SRCSET_WIDTHS};
use crate::services::messaging::whatsapp::{self, LinkError};

pub const SECTIONS: [&str; 11] = [
    "navigation",
    "about",
    "gallery",
    "services",
    "features",
    "structure",
    "rules",
    "faq",
    "testimonials",
    "team",
    "contact",
];

const CDN: &str = "https://res.cloudinary.com/drun5ro6g/image/upload";

struct ServiceSeed {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    category: &'static str,
    status: &'static str,
    image: &'static str,
    details: &'static str,
    enquiry: &'static str,
}

const SERVICES: [ServiceSeed; 4] = [
    ServiceSeed {
        id: "hospedagem",
        title: "Hospedagem",
        subtitle: "Hotel Pet Premium",
        category: "Hospedagem",
        status: "popular",
        image: "v1769644237/Cachorrada_linda_da_turminha_de_quinta-feira_wcmoyo.jpg",
        details: "5 estrelas com quartos individuais e climatizados. Monitoramento 24h. Obrigatório: Vacinas V10/V8 + Antirrábica e proteção contra pulgas.",
        enquiry: "Olá! Gostaria de fazer uma reserva de Hospedagem.",
    },
    ServiceSeed {
        id: "daycare",
        title: "Day Care",
        subtitle: "Creche Canina",
        category: "Recreação",
        status: "popular",
        image: "v1769644236/Cachorrada_linda_da_turminha_de_quinta-feira_1_fu15b3.jpg",
        details: "Socialização e gasto de energia. A solução para cães que ficam sozinhos. Enriquecimento ambiental e rotina de brincadeiras.",
        enquiry: "Olá! Gostaria de saber mais sobre o Day Care.",
    },
    ServiceSeed {
        id: "adestramento",
        title: "Adestramento",
        subtitle: "Obediência & Comportamento",
        category: "Educação",
        status: "new",
        image: "v1769644236/Cachorrada_linda_da_turminha_de_quinta-feira_2_gagajn.jpg",
        details: "Correção comportamental e obediência. Metodologia positiva para filhotes e adultos. Aulas presenciais ou Board & Train.",
        enquiry: "Olá! Gostaria de agendar uma aula de Adestramento.",
    },
    ServiceSeed {
        id: "consultoria",
        title: "Consultoria",
        subtitle: "Orientação para Tutores",
        category: "Consultoria",
        status: "available",
        image: "v1769644236/Cachorrada_linda_da_turminha_de_quinta-feira_3_umnwbh.jpg",
        details: "Primeiros passos para tutores. Escolha do filhote, adaptação do lar e introdução a outros pets.",
        enquiry: "Olá! Gostaria de agendar uma Consultoria.",
    },
];

const GALLERY: [&str; 12] = [
    "/images/dog-gallery/WhatsApp Image 2026-02-16 at 13.22.04.webp",
    "/images/dog-gallery/WhatsApp Image 2026-02-16 at 13.40.16 (1).webp",
    "/images/dog-gallery/WhatsApp Image 2026-02-16 at 13.40.16 (2).webp",
    "/images/dog-gallery/WhatsApp Image 2026-02-16 at 13.40.16 (3).webp",
    "/images/dog-gallery/WhatsApp Image 2026-02-16 at 13.40.16 (4).webp",
    "/images/dog-gallery/WhatsApp Image 2026-02-16 at 13.40.16 (6).webp",
    "/images/dog-gallery/WhatsApp Image 2026-02-16 at 13.40.16 (7).webp",
    "/images/dog-gallery/WhatsApp Image 2026-02-16 at 13.40.16.webp",
    "/images/dog-gallery/WhatsApp Image 2026-02-16 at 13.48.42 (2).webp",
    "/images/dog-gallery/WhatsApp Image 2026-02-16 at 13.48.42.webp",
    "/images/dog-gallery/WhatsApp Image 2026-02-16 at 13.48.43 (1).webp",
    "/images/dog-gallery/WhatsApp Image 2026-02-16 at 13.48.45.webp",
];

// (name, avatar name, text, date)
const REVIEWS: [(&str, &str, &str, &str); 8] = [
    ("Michel Lima", "Michel Lima", "Se quer ter um cão feliz, educado e protegido, o lugar é aqui. Seja para educar, hospedar ou até mesmo para passar o dia se divertindo. Nossos cães merecem.", "7 meses atrás"),
    ("Aline Lima", "Aline Lima", "Recomendo demais para quem precisa hospedar seu cachorro na região de Anchieta. Eles foram super atenciosos com meus dois cachorros, não tenho palavras para expressar minha gratidão pela hospedagem.", "1 ano atrás"),
    ("Lucas Mallmann", "Lucas Mallmann", "Você que mora em Anchieta, ou está passando um tempo por lá, e precise de uma estadia para seu cãozinho, este é o lugar perfeito para ele! Infraestrutura sensacional para o seu pet brincar, descontrair e depois descansa em paz.", "1 ano atrás"),
    ("Leonardo Alves", "Leonardo Alves", "O RK9 é um centro de treinamento e hotel para dogs. Tenho total confiança e admiração pelo trabalho que eles executam.", "8 meses atrás"),
    ("Raquel Dos santos silva", "Raquel Silva", "O espaço é ótimo. O gelinho meu cachorro que nunca esteve em contato com outros, adorou.", "5 meses atrás"),
    ("Ricardo Gomes de Abreu", "Ricardo Gomes", "Total segurança e responsabilidade com nosso Pet.", "1 ano atrás"),
    ("Raquel Teixeira", "Raquel Teixeira", "Ótimo lugar, ambiente super agradável, limpo e lindo para os cães. Super indico!!", "3 anos atrás"),
    ("Isabella Sarmento", "Isabella Sarmento", "Excelente localização e atendimento, além de profissionais super qualificados!!!", "3 anos atrás"),
];

fn avatar_url(name: &str) -> String {
    Url::parse_with_params(
        "https://ui-avatars.com/api/",
        &[("name", name), ("background", "0D9488"), ("color", "fff")],
    )
    .map(|u| u.to_string())
    .unwrap_or_default()
}

fn navigation() -> Vec<NavItem> {
    [
        ("Início", "/#home"),
        ("Sobre", "/#quem-somos"),
        ("Cãoleria", "/#dog-gallery"),
        ("Serviços", "/#servicos"),
        ("Estrutura", "/#estrutura"),
        ("Regras", "/#regras"),
        ("Dúvidas", "/#faq"),
        ("Contato", "/#contato"),
        ("Reservas", "/reservas"),
    ]
    .into_iter()
    .map(|(label, href)| NavItem { label, href })
    .collect()
}

fn about() -> About {
    About {
        eyebrow: "Sobre o RK9",
        title: "Muito mais que um hotel, uma segunda casa para o seu cão.",
        paragraphs: vec![
            "Localizado em Anchieta, ES, o RK9 nasceu da paixão por cães aliada ao profissionalismo.",
            "O nome RK9 carrega nossa essência: a união do sobrenome Romeiro com a sigla mundial K9 (canine), associada aos cães de serviço e trabalho, reforçada pela nossa experiência com cães policiais.",
            "Cada atendimento é individual, respeitando a personalidade, o tempo e as necessidades de cada animal.",
            "Monitoramento constante; áreas de lazer separadas por porte; relatórios diários para o tutor.",
        ],
        cta_href: "/reservas",
    }
}

fn services(config: &AppConfig) -> Result<Vec<ServiceCard>, LinkError> {
    SERVICES
        .iter()
        .map(|seed| {
            let url = format!("{CDN}/{}", seed.image);
            Ok(ServiceCard {
                id: seed.id,
                title: seed.title,
                subtitle: seed.subtitle,
                category: seed.category,
                status: seed.status,
                details: seed.details,
                image: ResponsiveImage::new(&url, 800, &[400, 800], seed.title),
                enquiry_url: whatsapp::deep_link(&config.contact_whatsapp, Some(seed.enquiry))?
                    .to_string(),
            })
        })
        .collect()
}

fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "Monitoramento 24h",
            description: "Câmeras de alta definição e supervisão constante para garantir a segurança do seu pet.",
        },
        Feature {
            title: "Saúde em Primeiro Lugar",
            description: "Controle rigoroso de vacinas, ectoparasitas e acompanhamento veterinário preventivo.",
        },
        Feature {
            title: "Ambiente Controlado",
            description: "Área verde ampla, segura e dedetizada, projetada para explorar os instintos naturais.",
        },
    ]
}

fn structure() -> Vec<Feature> {
    vec![
        Feature {
            title: "Suítes de Descanso Climatizadas",
            description: "Baias individuais, higienizadas e com temperatura controlada para uma noite de sono tranquila e segura.",
        },
        Feature {
            title: "Ampla Área Verde de Lazer",
            description: "Milhares de metros quadrados de gramado cercado para corridas, brincadeiras e gasto de energia supervisionado.",
        },
        Feature {
            title: "Pista de Treinamento e Agility",
            description: "Estrutura profissional completa para exercícios físicos e sessões de adestramento focadas e dinâmicas.",
        },
        Feature {
            title: "Segurança e Monitoramento 24h",
            description: "Ambiente totalmente murado, com câmeras de vigilância e equipe capacitada sempre atenta ao bem-estar dos cães.",
        },
    ]
}

fn rules() -> Vec<HouseRule> {
    vec![
        HouseRule {
            title: "Saúde em Dia",
            description: "Carteira de vacina, vermífugo e anti parasitas em dia. Vacinas necessárias: 3 doses da Polivalente (em FILHOTES), V10/V8, antirrábica (a partir de 1 ano).",
        },
        HouseRule {
            title: "Fêmeas",
            description: "Fêmeas não castradas serão aceitas apenas fora do período de cio.",
        },
        HouseRule {
            title: "Comportamento",
            description: "Aceitamos apenas cães que são sociáveis com outros cães e pessoas. Cães com histórico de reatividade deverão passar por uma avaliação antes da hospedagem.",
        },
        HouseRule {
            title: "Pertences & Alimentação",
            description: "Traga a alimentação em potes com tampa ou saco lacrado e a carteira de vacinação. Caminha e brinquedos ficam a critério do tutor.",
        },
        HouseRule {
            title: "Pagamento & Agendamento",
            description: "O agendamento só será feito mediante ao pagamento de 50% do valor total. (Caso haja desistência, o valor da entrada não será devolvido, ficando como crédito por 30 dias).",
        },
    ]
}

fn faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            id: 1,
            question: "Quais são as vacinas e exames obrigatórios?",
            answer: "Para segurança de todos, exigimos: Carteira de vacina em dia (V10/V8, Antirrábica e 3 doses da Polivalente para filhotes), além de vermífugo e antiparasitário em dia.",
        },
        FaqEntry {
            id: 2,
            question: "Aceitam fêmeas no cio?",
            answer: "Não. Fêmeas não castradas serão aceitas apenas fora do período de cio.",
        },
        FaqEntry {
            id: 3,
            question: "Meu cão precisa ser sociável?",
            answer: "Aceitamos apenas cães sociáveis com outros cães e pessoas. Cães com histórico de reatividade deverão passar por uma avaliação comportamental antes da hospedagem.",
        },
        FaqEntry {
            id: 4,
            question: "O que preciso levar na mala do meu pet?",
            answer: "Traga a alimentação (em potes/balde com tampa ou saco lacrado) e a carteira de vacinação. Outros pertences (caminha, brinquedo) ficam a critério do tutor.",
        },
        FaqEntry {
            id: 5,
            question: "Como funciona o pagamento e cancelamento?",
            answer: "O agendamento é confirmado mediante pagamento de 50% do valor. Em caso de desistência, o valor da entrada não é devolvido, mas fica como crédito por 30 dias.",
        },
    ]
}

fn testimonials() -> Vec<Testimonial> {
    REVIEWS
        .iter()
        .zip(1u32..)
        .map(|(&(name, avatar, text, date), id)| Testimonial {
            id,
            name,
            subtitle: "Cliente RK9",
            text,
            rating: 5,
            avatar_url: avatar_url(avatar),
            date,
        })
        .collect()
}

fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Michel Romeiro",
            role: "Adestrador Chefe & Comportamentalista",
        },
        TeamMember {
            name: "Ada Romeiro",
            role: "Coordenadora de Bem-Estar & Recreação",
        },
        TeamMember {
            name: "Kaiky",
            role: "Monitor",
        },
    ]
}

fn contact(config: &AppConfig) -> Result<Contact, LinkError> {
    Ok(Contact {
        whatsapp_url: whatsapp::deep_link(&config.contact_whatsapp, None)?.to_string(),
        email: "contato@rk9.com.br",
        instagram_handle: "@ctromeirok9",
        instagram_url: "https://www.instagram.com/ctromeirok9",
        copyright: format!("© 2026 {} CT e Hotel. Todos os direitos reservados.", config.business_name),
    })
}

pub fn site_content(config: &AppConfig) -> Result<SiteContent, LinkError> {
    Ok(SiteContent {
        navigation: navigation(),
        about: about(),
        gallery: GALLERY
            .iter()
            .map(|path| ResponsiveImage::new(path, 600, &DEFAULT_SRCSET_WIDTHS, "Cão na RK9"))
            .collect(),
        services: services(config)?,
        features: features(),
        structure: structure(),
        rules: rules(),
        faq: faq(),
        testimonials: testimonials(),
        team: team(),
        contact: contact(config)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            port: 3000,
            availability_webhook_url: String::new(),
            webhook_timeout_secs: 5,
            booking_whatsapp: "555194244240".to_string(),
            contact_whatsapp: "+55 28 99957-4221".to_string(),
            business_name: "RK9".to_string(),
            session_ttl_minutes: 60,
            business_utc_offset: crate::config::default_utc_offset(),
        }
    }

    #[test]
    fn test_service_images_go_through_cdn() {
        let content = site_content(&config()).unwrap();
        assert_eq!(content.services.len(), 4);
        for card in &content.services {
            assert!(card.image.src.contains("/upload/f_auto,q_auto,w_800/"));
            assert_eq!(card.image.srcset.as_deref().unwrap().split(", ").count(), 2);
            assert!(card.enquiry_url.starts_with("https://wa.me/5528999574221?text="));
        }
    }

    #[test]
    fn test_local_gallery_images_untouched() {
        let content = site_content(&config()).unwrap();
        assert_eq!(content.gallery.len(), 12);
        assert!(content.gallery.iter().all(|img| img.srcset.is_none()));
        assert_eq!(content.gallery[0].src, GALLERY[0]);
    }

    #[test]
    fn test_contact_and_testimonials() {
        let content = site_content(&config()).unwrap();
        assert_eq!(content.contact.whatsapp_url, "https://wa.me/5528999574221");
        assert_eq!(content.testimonials.len(), 8);
        assert_eq!(content.testimonials[7].id, 8);
        assert!(content.testimonials[0].avatar_url.contains("name=Michel+Lima"));
    }

    #[test]
    fn test_bad_contact_phone_is_an_error() {
        let mut cfg = config();
        cfg.contact_whatsapp = "none".to_string();
        assert!(site_content(&cfg).is_err());
    }

    #[test]
    fn test_sections_match_serialized_keys() {
        let json = serde_json::to_value(site_content(&config()).unwrap()).unwrap();
        for section in SECTIONS {
            assert!(json.get(section).is_some(), "missing section {section}");
        }
    }
}
